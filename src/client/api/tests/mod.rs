mod read_body;

use super::*;

use crate::client::util::test::{fixtures::mock_advertisement, test_setup, FakeBackend};
