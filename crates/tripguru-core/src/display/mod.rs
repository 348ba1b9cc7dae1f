//! Markdown formatting for trips, trip lists, form errors and events.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and form feedback get newtype wrappers so each context
//! formats consistently.
//!
//! ```rust
//! use tripguru_core::{display::Trips, models::Trip};
//!
//! let output = Trips(&[]).to_string();
//! assert_eq!(output, "No trips found.\n");
//!
//! let trips = vec![Trip {
//!     id: 1,
//!     destination: Some("Rome".to_string()),
//!     ..Trip::new("Rome Trip")
//! }];
//! let output = Trips(&trips).to_string();
//! assert!(output.contains("## Rome Trip (ID: 1)"));
//! assert!(output.contains("Destination**: Rome"));
//! ```
//!
//! - [`collections`]: the [`Trips`] list wrapper
//! - [`datetime`]: `dd.MM.yyyy` dates and local timestamps
//! - [`form`]: the [`FormErrors`] wrapper
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod form;
pub mod models;

pub use collections::Trips;
pub use datetime::{format_date, mask_date_digits, parse_display_date, LocalDate, LocalDateTime};
pub use form::FormErrors;
