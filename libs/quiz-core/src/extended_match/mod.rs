//! Extended-match questions: draw lines between a left and a right column.

pub mod pairing;
pub mod registry;
pub mod session;
pub mod verify;

pub use pairing::{MatchState, Pairing, PairingMachine, SelectionHighlight, TailState};
pub use registry::ItemRegistry;
pub use session::{AttemptRecord, CorrectionView, MatchSession};
pub use verify::{check_answer, verdict, Verdict};
