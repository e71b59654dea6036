use std::{fs::File, io::BufReader};

use ciborium::{de, ser};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{RecognizerError, Result};

pub trait SerializableConfig: Serialize {
    fn save_to_file(&self, path: &str) -> Result<()> {
        let mut file = File::create(path).map_err(|source| RecognizerError::File {
            path: path.to_owned(),
            source,
        })?;
        ser::into_writer(self, &mut file).map_err(RecognizerError::Encode)
    }
    fn save_to_buffer(&self) -> Result<Vec<u8>> {
        let mut bytes: Vec<u8> = Vec::new();
        ser::into_writer(self, &mut bytes).map_err(RecognizerError::Encode)?;
        Ok(bytes)
    }
}
pub trait DeserializableConfig: DeserializeOwned + Sized {
    fn load_from_file(path: &str) -> Result<Self> {
        let file = File::open(path).map_err(|source| RecognizerError::File {
            path: path.to_owned(),
            source,
        })?;
        let reader = BufReader::new(file);
        de::from_reader(reader).map_err(RecognizerError::Decode)
    }
    fn load_from_buffer(buffer: &[u8]) -> Result<Self> {
        de::from_reader(buffer).map_err(RecognizerError::Decode)
    }
}
