//! The check-in decision pipeline.
//!
//! [`CheckInCoordinator`] combines the token validator, the proximity
//! engine, and the attendance store into exactly one authoritative
//! [`CheckInDecision`] per attempt. Expected rejections are decision
//! values; only infrastructure failures use the error channel.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, Utc};
//! use eviden_core::checkin::{CheckInCoordinator, CheckInDecision, CheckInRequest};
//! use eviden_core::event::{Event, EventId, InMemoryEventDirectory};
//! use eviden_core::geo::{Coordinates, VenueSize, VenueType};
//! use eviden_core::store::InMemoryAttendanceStore;
//! use eviden_core::token::{codec, IssuerKey, SecurityLevel, SecurityPolicy, TokenIssuer, TokenValidator};
//!
//! let key = IssuerKey::generate();
//! let now = Utc::now();
//!
//! let directory = InMemoryEventDirectory::new();
//! let event = Event::new(
//!     EventId::new("evt_1"),
//!     Coordinates::new(52.52, 13.405).unwrap(),
//!     100.0,
//!     VenueType::Outdoor,
//!     VenueSize::Large,
//!     800,
//!     SecurityLevel::Standard,
//!     now - Duration::hours(1),
//!     now + Duration::hours(5),
//! )
//! .unwrap();
//! directory.upsert(event.clone()).unwrap();
//!
//! let issuer = TokenIssuer::new(key.clone());
//! let coordinator = CheckInCoordinator::new(
//!     directory,
//!     InMemoryAttendanceStore::new(),
//!     TokenValidator::new(key, SecurityPolicy::default()),
//! );
//!
//! let token = issuer.issue(event.id(), SecurityLevel::Standard, now);
//! let request = CheckInRequest {
//!     event_id: event.id().clone(),
//!     user_id: "user_a".to_string(),
//!     token_payload: codec::encode(&token),
//!     latitude: 52.5201,
//!     longitude: 13.4051,
//!     reported_at: None,
//! };
//!
//! let decision = coordinator.attempt_check_in(&request, now).unwrap();
//! assert!(matches!(decision, CheckInDecision::CheckedIn { .. }));
//! ```

pub mod coordinator;
pub mod error;
pub mod types;

pub use coordinator::CheckInCoordinator;
pub use error::CheckInError;
pub use types::{CheckInDecision, CheckInRequest, CheckInResponse, Rejection};
