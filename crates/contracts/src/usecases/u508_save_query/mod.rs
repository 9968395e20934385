pub mod request;
pub mod response;

pub use request::{SaveQueryRequest, CREATE_SAVED_QUERY_PATH};
pub use response::SaveQueryResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct SaveQuery;

impl UseCaseMetadata for SaveQuery {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "save_query"
    }

    fn display_name() -> &'static str {
        "Save query"
    }

    fn description() -> &'static str {
        "Persist the current SQL Lab query under a label and description"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(SaveQuery::full_name(), "u508_save_query");
    }
}
