//! Commentary prompt construction.

use crate::models::PassageQuery;

/// Section headings the model is asked to produce, in order.
pub const COMMENTARY_SECTIONS: [&str; 3] = [
    "Author and Date",
    "Historical Context",
    "Theological Significance",
];

/// Build the study-Bible commentary prompt for `passage`.
///
/// The wording is fixed; only the passage reference varies. The model's
/// reply is expected to be markdown with one heading per section, but that
/// is not enforced downstream.
pub fn build_commentary_prompt(passage: &PassageQuery) -> String {
    format!(
        "Act as a Reformed theologian and Bible scholar providing commentary for a study Bible.\n\
         Analyze the following biblical passage: {passage}.\n\
         Provide a clear, concise analysis covering these key areas:\n\
         1. **{author}:** Briefly state who wrote the book and when.\n\
         2. **{history}:** Describe the circumstances surrounding the original audience. \
         What was happening politically, culturally, and within the early church or Israel?\n\
         3. **{theology}:** Explain the main theological points of this specific passage, \
         interpreting it through a Reformed lens. Emphasize themes like God's sovereignty, \
         covenant theology, the glory of God (Soli Deo Gloria), and how this passage points to Christ.\n\
         Structure your response using markdown for clear headings.",
        passage = passage,
        author = COMMENTARY_SECTIONS[0],
        history = COMMENTARY_SECTIONS[1],
        theology = COMMENTARY_SECTIONS[2],
    )
}
