//! Indented XML writer over quick-xml.
//!
//! Text content and attribute values are escaped by quick-xml.

use std::fmt::Display;

use ledgerlink_domain::{LedgerLinkError, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    pub fn new() -> Self {
        Self { inner: Writer::new_with_indent(Vec::new(), b' ', 4) }
    }

    pub fn open(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<&mut Self> {
        let mut start = BytesStart::new(name);
        for &(key, value) in attributes {
            start.push_attribute((key, value));
        }
        self.inner.write_event(Event::Start(start)).map_err(write_failed)?;
        Ok(self)
    }

    pub fn close(&mut self, name: &str) -> Result<&mut Self> {
        self.inner.write_event(Event::End(BytesEnd::new(name))).map_err(write_failed)?;
        Ok(self)
    }

    /// `<name>value</name>`
    pub fn leaf(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        self.open(name, &[])?;
        self.inner.write_event(Event::Text(BytesText::new(value))).map_err(write_failed)?;
        self.close(name)
    }

    /// Write `<name>value</name>` only when `value` is present and non-blank.
    pub fn leaf_opt(&mut self, name: &str, value: Option<&str>) -> Result<&mut Self> {
        match value.map(str::trim) {
            Some(value) if !value.is_empty() => self.leaf(name, value),
            _ => Ok(self),
        }
    }

    /// Open `name`, let `body` write the children, then close it.
    pub fn element<F>(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        body: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.open(name, attributes)?;
        body(self)?;
        self.close(name)
    }

    pub fn finish(self) -> Result<String> {
        String::from_utf8(self.inner.into_inner()).map_err(|err| {
            LedgerLinkError::Internal(format!("XML writer produced invalid UTF-8: {err}"))
        })
    }
}

fn write_failed<E: Display>(err: E) -> LedgerLinkError {
    LedgerLinkError::Internal(format!("failed to write XML: {err}"))
}
