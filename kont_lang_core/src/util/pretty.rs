use pretty::RcDoc;

#[macro_export]
macro_rules! sp {
    () => {
        RcDoc::text(" ")
    };
}

pub fn parens<T>(doc: RcDoc<T>) -> RcDoc<T> {
    RcDoc::text("(").append(doc).append(RcDoc::text(")"))
}

/// render a doc to a string at the given line width.
pub fn to_pretty(doc: RcDoc<()>, width: usize) -> String {
    let mut out = Vec::new();
    doc.render(width, &mut out)
        .expect("to_pretty: rendering to a Vec failed");
    String::from_utf8(out).expect("to_pretty: doc rendered to invalid utf8")
}
