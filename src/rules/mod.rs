//! One module per diagnostic code. This engine has a single taxonomy, so each module is named
//! directly after its code. Node-local rules live here as pure functions; rules that need the
//! scope/binding graph
//! (E0102, E0115, E0117, E0118, E0602, E0606) are invoked from `crate::resolver` /
//! `crate::definite_assignment` directly since their "trigger" cannot be decided from a
//! single node in isolation.

pub mod e0100;
pub mod e0101;
pub mod e0103_e0116;
pub mod e0104_e0106;
pub mod e0107;
pub mod e0108;
pub mod e0109;
pub mod e0111;
pub mod e0112;
pub mod e0119;
pub mod e0211_e0213;
pub mod e0704_e0711;
pub mod e1142;
