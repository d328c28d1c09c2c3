//! Input/output traits
use crate::types::Result;
use std::fs;

pub trait ConvertToSerializable: Sized {
    //! Convert to/from a RON string
    type SerializableType: serde::Serialize;
    /// Convert to ron
    fn to_serializable(&self) -> Self::SerializableType;
    /// Convert from ron
    ///
    /// Fails if the data does not describe a valid object.
    fn from_serializable(s: Self::SerializableType) -> Result<Self>;
}

pub trait RONExport {
    //! Export as RON

    /// Generate the RON string
    fn to_ron_string(&self) -> Result<String>;

    /// Export as RON
    fn export_as_ron(&self, filename: &str) -> Result<()> {
        let ron_s = self.to_ron_string()?;
        fs::write(filename, ron_s)?;
        Ok(())
    }
}

pub trait RONImport: Sized {
    //! Import from RON

    /// Create from a RON string
    fn from_ron_string(s: String) -> Result<Self>;

    /// Import from a RON file
    fn import_from_ron(filename: &str) -> Result<Self> {
        let content = fs::read_to_string(filename)?;
        Self::from_ron_string(content)
    }
}
