/// Concatenate CoNLL-U file contents in caller-supplied order.
///
/// A single line feed is placed between consecutive inputs and nothing is
/// appended after the last one, so joining the chunks produced by
/// [`crate::slicer::split_conllu`] reconstructs the sliced file exactly.
pub fn join_texts<S: AsRef<str>>(texts: &[S]) -> String {
    texts
        .iter()
        .map(|text| text.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
}
