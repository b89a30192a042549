//! Tests for services driving the full ingestion workflow against mock providers.


use tempest_test_utils::prelude::*;

use crate::util::{date, window, TestContextExt};
