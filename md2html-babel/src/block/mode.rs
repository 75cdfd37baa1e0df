//! Block mode, the only state the transducer carries from one line to the next.

use crate::fragment::Fragment;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockMode {
    #[default]
    None,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl BlockMode {
    /// Fragment that opens this mode's container.
    pub fn opening_fragment(self) -> Option<Fragment> {
        match self {
            BlockMode::None => None,
            BlockMode::UnorderedList => Some(Fragment::OpenList { ordered: false }),
            BlockMode::OrderedList => Some(Fragment::OpenList { ordered: true }),
            BlockMode::Paragraph => Some(Fragment::OpenParagraph),
        }
    }

    /// Fragment that closes this mode's container.
    pub fn closing_fragment(self) -> Option<Fragment> {
        match self {
            BlockMode::None => None,
            BlockMode::UnorderedList => Some(Fragment::CloseList { ordered: false }),
            BlockMode::OrderedList => Some(Fragment::CloseList { ordered: true }),
            BlockMode::Paragraph => Some(Fragment::CloseParagraph),
        }
    }
}
