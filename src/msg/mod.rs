//! Typed messages for the contracts the scripts talk to.
//!
//! Every message serialises to the externally tagged, snake_case JSON the
//! contracts expect, e.g. `{"burn_ft":{"amount":"2500000"}}`. Anything not
//! covered here can still be sent as a raw `serde_json::Value`.

pub mod astroport;

pub mod cw404;

pub mod launchpad;
