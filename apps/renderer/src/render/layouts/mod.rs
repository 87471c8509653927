//! Layout builders, one per structurally distinct layout.
//!
//! Builders differ in section ordering, grouping (single column, sidebar/main
//! split, section grid) and markup structure. Section visibility and date
//! formatting come from `render::helpers` and are never re-decided here.

pub mod academic;
pub mod classic;
pub mod clean;
pub mod corporate;
pub mod creative;
pub mod elegant;
pub mod executive;
pub mod minimal;
pub mod modern;
pub mod portfolio;
pub mod professional;
pub mod technical;
