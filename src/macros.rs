/// Builds a [`Document`](crate::Document) from `name => content` pairs.
///
/// Pairs are inserted in the order written, so the resulting document
/// serializes in that order. A repeated name follows
/// [`Document::set`](crate::Document::set) semantics: the later content wins
/// and the position of the first occurrence is kept.
///
/// # Examples
///
/// ```rust
/// use bmx::bmx;
///
/// let document = bmx! {
///     "title" => "BMX\n",
///     "body" => "blocks of text\n",
/// };
///
/// assert_eq!(document.keys(), vec!["title", "body"]);
/// assert_eq!(bmx::to_string(&document).unwrap(), "[ title ]\nBMX\n[ body ]\nblocks of text\n");
/// ```
#[macro_export]
macro_rules! bmx {
    () => {
        $crate::Document::new()
    };

    ( $($name:expr => $content:expr),+ $(,)? ) => {{
        let mut document = $crate::Document::new();
        $(
            document.set($name.to_string(), $content.to_string());
        )+
        document
    }};
}
