mod from_api_url;
mod from_json;

use super::*;
