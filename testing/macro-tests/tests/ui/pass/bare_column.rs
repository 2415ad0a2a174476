use cellmap::prelude::*;

#[derive(Default, Row)]
struct Note {
    #[column]
    body: String,

    #[column(order = 0)]
    title: String,

    attachments: Vec<Vec<u8>>,
}

fn main() {
    let column = Note::MODEL.field("body").unwrap().column.unwrap();
    assert_eq!(column.name, "body");
    assert_eq!(column.order, None);

    let mapper = SheetMapper::new();
    assert_eq!(mapper.write_column_names::<Note>(), ["title"]);

    let note = Note {
        title: "t".into(),
        ..Note::default()
    };
    assert_eq!(note.body, "");
    assert!(note.attachments.is_empty());
}
