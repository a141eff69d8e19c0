mod track_click;

use super::*;

use crate::{
    client::util::test::{
        fixtures::{mock_advertisement, mock_advertisement_at},
        signed_in, test_setup, FakeBackend,
    },
    model::advertisement::{AdType, Position},
};
