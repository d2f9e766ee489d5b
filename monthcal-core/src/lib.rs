//! Core month-grid logic for the monthcal ecosystem.
//!
//! This crate provides the types shared by every consumer of a classified
//! calendar grid:
//! - [`DayCell`] — the per-day classification record
//! - [`build_month_grid`] — the grid builder itself
//! - [`DisabledDays`] and [`GridOptions`] for configuring a build
//! - [`MonthProps`] for re-render guards in presentation layers

pub mod cell;
pub mod disabled;
pub mod error;
pub mod grid;
pub mod props;

pub use cell::DayCell;
pub use disabled::DisabledDays;
pub use error::{MonthCalError, MonthCalResult};
pub use grid::{GridOptions, build_month_grid, build_month_grid_with_today};
pub use props::MonthProps;
