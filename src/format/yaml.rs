//! Multi-document YAML decoder.

use std::io::BufRead;

use serde::Deserialize;

use super::{Format, FormatError, FormatKind, RawRecord};

/// YAML decoder using serde_yaml.
///
/// Each document of a `---` separated stream is one record. Empty or null
/// documents are not records, so an empty or comment-only file and a trailing
/// `---` yield nothing. Positions stay 1-based document indices. Note that
/// serde_yaml buffers the whole reader before handing out the first
/// document, so this decoder streams records but not bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl Format for YamlFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::Yaml
    }

    fn decode(
        &self,
        reader: &mut dyn BufRead,
        emit: &mut dyn FnMut(RawRecord) -> bool,
    ) -> Result<(), FormatError> {
        for (idx, document) in serde_yaml::Deserializer::from_reader(reader).enumerate() {
            let position = idx as u64 + 1;
            let value = serde_json::Value::deserialize(document).map_err(|e| {
                FormatError::Malformed {
                    position,
                    message: e.to_string(),
                }
            })?;
            if value.is_null() {
                continue;
            }

            if !emit(RawRecord::new(FormatKind::Yaml, position, value)) {
                break;
            }
        }
        Ok(())
    }
}
