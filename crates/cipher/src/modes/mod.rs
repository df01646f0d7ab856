//! Chaining modes over the keyed block primitive
//!
//! Each submodule is the running state for one block-mode category, fed
//! by the cipher context: whole blocks for CBC, single bytes carried
//! across calls for the feedback and counter modes. ECB has no chaining
//! state and is driven directly by the context's chunk driver.

pub(crate) mod cbc;
pub(crate) mod cfb;
pub(crate) mod ctr;
pub(crate) mod ofb;

pub(crate) use cbc::CbcState;
pub(crate) use cfb::CfbState;
pub(crate) use ctr::CtrState;
pub(crate) use ofb::OfbState;
