use pulldown_cmark::{html, Event, Options, Parser};

/// Render model-authored markdown to HTML.
///
/// Raw HTML embedded in the markdown is emitted as escaped text, so the
/// result is safe to insert into the page unescaped. Malformed markdown is
/// rendered best-effort, never rejected.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
