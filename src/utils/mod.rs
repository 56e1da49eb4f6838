pub mod response;
pub mod validation;

pub use response::{
    json_config, parse_id, query_config, store_error_status, write_error, write_message,
    write_store_error, ErrorResponse, MessageResponse,
};
pub use validation::{Validate, ValidationError, Validator, Violations};
