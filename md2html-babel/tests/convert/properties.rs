//! Property tests for the transducer

use md2html_babel::{convert, transduce, ConvertOptions, Fragment};
use proptest::prelude::*;

fn markdownish_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,3}",
        "# [a-z *_]{0,12}",
        "\\* [a-z*_\\[\\]()]{0,12}",
        "1\\. [a-z1. *_]{0,12}",
        "[a-zA-Z *_\\[\\]()c]{1,20}",
    ]
}

fn markdownish_document() -> impl Strategy<Value = String> {
    prop::collection::vec(markdownish_line(), 0..20).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn conversion_is_deterministic(source in markdownish_document()) {
        let options = ConvertOptions::default();
        prop_assert_eq!(convert(&source, &options), convert(&source, &options));
    }

    #[test]
    fn blank_documents_produce_nothing(lines in prop::collection::vec("[ \t]{0,4}", 0..10)) {
        let source = lines.join("\n");
        prop_assert_eq!(convert(&source, &ConvertOptions::default()), "");
    }

    #[test]
    fn containers_never_nest_and_always_close(source in markdownish_document()) {
        let fragments = transduce(&source, &ConvertOptions::default());
        let mut open: Option<&Fragment> = None;
        for fragment in &fragments {
            match fragment {
                Fragment::OpenList { .. } | Fragment::OpenParagraph => {
                    prop_assert!(open.is_none());
                    open = Some(fragment);
                }
                Fragment::CloseList { ordered } => {
                    prop_assert_eq!(open.cloned(), Some(Fragment::OpenList { ordered: *ordered }));
                    open = None;
                }
                Fragment::CloseParagraph => {
                    prop_assert_eq!(open.cloned(), Some(Fragment::OpenParagraph));
                    open = None;
                }
                Fragment::Heading(_) => prop_assert!(open.is_none()),
                Fragment::ListItem(_) => {
                    prop_assert!(matches!(open, Some(Fragment::OpenList { .. })), "list item outside an open list");
                }
                Fragment::Text(_) => {
                    prop_assert_eq!(open.cloned(), Some(Fragment::OpenParagraph));
                }
            }
        }
        prop_assert!(open.is_none());
    }
}
