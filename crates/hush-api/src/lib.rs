//! # Hush API
//!
//! HTTP surface for gating decisions. The whole adapter is deliberately
//! thin: parse JSON, call the policy, return JSON.
//!
//! ## Endpoints
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | POST | `/v1/decide` | Full policy: signals in, decision + reasons out |
//! | POST | `/v1/gate` | Two-threshold gate: coherence/drift in, bool out |
//! | POST | `/v1/consensus` | Consensus ratio over response strings |
//! | GET | `/health` | Liveness |

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::api_router;
pub use server::{init_tracing, HushServer, ServerConfig};
pub use state::AppState;
