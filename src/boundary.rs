//! Command boundary between the host editor and the core.
//!
//! The host issues an operation name plus an ordered sequence of string
//! arguments; the boundary validates argument counts, runs the matching core
//! operation, and translates the result into a JSON value. Validation
//! failures reject the call before any work begins.

use serde_json::Value;
use std::path::Path;

use crate::docs::fetcher::IndexFetcher;
use crate::error::{DocdexError, Result};
use crate::service::DocdexService;

pub const GET_INDICES: &str = "GetIndices";
pub const GET_PATH: &str = "GetPath";
pub const GET_FILES: &str = "GetFiles";
pub const OPEN_FILE: &str = "OpenFile";
pub const WRITE_FILE: &str = "WriteFile";

/// Dispatch one host call to the core.
pub fn dispatch<F: IndexFetcher>(
    service: &DocdexService<F>,
    operation: &str,
    args: &[String],
) -> Result<Value> {
    match operation {
        GET_INDICES => {
            // the second argument is the host-side callback name, accepted
            // and ignored by the core
            if args.len() < 2 {
                return Err(DocdexError::invalid_arguments(operation, "at least 2", args.len()));
            }
            let index = service.get_indices(&args[0])?;
            Ok(serde_json::to_value(index)?)
        }
        GET_PATH => {
            if args.len() > 1 {
                return Err(DocdexError::invalid_arguments(operation, "at most 1", args.len()));
            }
            let locator = args.first().map(String::as_str).unwrap_or_default();
            Ok(Value::String(service.get_path(locator)?))
        }
        GET_FILES => {
            if args.len() != 1 {
                return Err(DocdexError::invalid_arguments(operation, "exactly 1", args.len()));
            }
            let tree = service.get_files(Path::new(&args[0]));
            Ok(serde_json::to_value(tree)?)
        }
        OPEN_FILE => {
            if args.len() != 1 {
                return Err(DocdexError::invalid_arguments(operation, "exactly 1", args.len()));
            }
            Ok(Value::String(service.open_file(Path::new(&args[0]))?))
        }
        WRITE_FILE => {
            if args.len() != 2 {
                return Err(DocdexError::invalid_arguments(operation, "exactly 2", args.len()));
            }
            service.write_file(Path::new(&args[0]), &args[1])?;
            Ok(Value::Null)
        }
        other => Err(DocdexError::unknown_operation(other)),
    }
}
