//! Share classes module - preference terms attached to issued shares.

mod share_classes_model;

pub use share_classes_model::{NewShareClass, ParticipationKind, ShareClass, ShareClassKind};
