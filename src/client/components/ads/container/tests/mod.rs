mod slot_allowed;

use super::*;

use crate::client::config::Breakpoint;
