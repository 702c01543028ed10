//! 육십갑자 알파벳과 관계 태그.

pub mod element;
pub mod ganji;
pub mod relation;

pub use element::{Element, ElementSet, Polarity};
pub use ganji::{Branch, GanjiPair, Napeum, Stem, NAPEUM_TABLE};
pub use relation::{BranchInteraction, Impact, InteractionKind, Sibsin, TwelveStage};
