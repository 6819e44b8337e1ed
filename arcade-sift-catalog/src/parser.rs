use std::io::BufRead;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::CatalogError;
use crate::machine::{Catalog, Control, Display, Input, MachineRecord};

/// Which top-level element name an entry was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    /// `<machine>`, used by current catalogs
    Machine,
    /// `<game>`, used by catalogs from before the rename
    Game,
}

impl EntryKind {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"machine" => Some(Self::Machine),
            b"game" => Some(Self::Game),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextField {
    Description,
    Year,
    Manufacturer,
    Category,
}

impl TextField {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"description" => Some(Self::Description),
            b"year" => Some(Self::Year),
            b"manufacturer" => Some(Self::Manufacturer),
            b"category" => Some(Self::Category),
            _ => None,
        }
    }

    fn tag(self) -> &'static [u8] {
        match self {
            Self::Description => b"description",
            Self::Year => b"year",
            Self::Manufacturer => b"manufacturer",
            Self::Category => b"category",
        }
    }
}

/// Parse a machine catalog from any buffered reader.
///
/// Entries are the direct children of the root element named `machine` or
/// `game`. The `machine` entries are returned when there are any, otherwise
/// the `game` entries.
pub fn parse_catalog<R: BufRead>(reader: R) -> Result<Catalog, CatalogError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut machines = Vec::new();
    let mut games = Vec::new();
    let mut current: Option<EntryBuilder> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                if depth == 0 {
                    saw_root = true;
                } else if depth == 1 {
                    if let Some(kind) = EntryKind::from_tag(e.name().as_ref()) {
                        current = Some(EntryBuilder::open(kind, e)?);
                    }
                } else if let Some(ref mut entry) = current {
                    entry.child(e, true)?;
                }
                depth += 1;
            }
            Event::Empty(ref e) => {
                if depth == 0 {
                    saw_root = true;
                } else if depth == 1 {
                    if let Some(kind) = EntryKind::from_tag(e.name().as_ref()) {
                        let (kind, machine) = EntryBuilder::open(kind, e)?.finish();
                        match kind {
                            EntryKind::Machine => machines.push(machine),
                            EntryKind::Game => games.push(machine),
                        }
                    }
                } else if let Some(ref mut entry) = current {
                    entry.child(e, false)?;
                }
            }
            Event::Text(ref e) => {
                if let Some(ref mut entry) = current {
                    entry.push_text(&e.unescape()?);
                }
            }
            Event::CData(ref e) => {
                if let Some(ref mut entry) = current {
                    entry.push_text(&String::from_utf8_lossy(e));
                }
            }
            Event::End(ref e) => {
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    if let Some(entry) = current.take() {
                        let (kind, machine) = entry.finish();
                        match kind {
                            EntryKind::Machine => machines.push(machine),
                            EntryKind::Game => games.push(machine),
                        }
                    }
                } else if let Some(ref mut entry) = current {
                    entry.close_child(e.name().as_ref());
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(CatalogError::invalid_catalog("No root element found"));
    }
    if depth != 0 {
        return Err(CatalogError::invalid_catalog(format!(
            "Document ended with {depth} unclosed element(s)"
        )));
    }

    let entries = if machines.is_empty() { games } else { machines };
    if entries.is_empty() {
        log::warn!("Catalog contains no machine or game entries");
    }

    Ok(Catalog::new(entries))
}

/// Parse a machine catalog from a file path.
pub fn parse_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    parse_catalog(reader)
}

/// Accumulates one entry while its children are being read.
struct EntryBuilder {
    kind: EntryKind,
    machine: MachineRecord,
    in_input: bool,
    text_field: Option<TextField>,
    text: String,
}

impl EntryBuilder {
    fn open(kind: EntryKind, e: &BytesStart<'_>) -> Result<Self, CatalogError> {
        let mut machine = MachineRecord::default();

        for attr in e.attributes() {
            let attr = attr?;
            let value = attr.unescape_value()?.into_owned();
            match attr.key.as_ref() {
                b"name" => machine.name = value,
                b"sourcefile" => machine.source_file = non_empty(value),
                b"isbios" => machine.is_bios = value == "yes",
                b"isdevice" => machine.is_device = value == "yes",
                b"ismechanical" => machine.is_mechanical = value == "yes",
                b"runnable" => machine.is_runnable = value != "no",
                b"cloneof" => machine.clone_of = non_empty(value),
                b"romof" => machine.rom_of = non_empty(value),
                b"sampleof" => machine.sample_of = non_empty(value),
                _ => {}
            }
        }

        if machine.name.is_empty() {
            return Err(CatalogError::invalid_catalog(
                "Found a machine entry without a name",
            ));
        }

        Ok(Self {
            kind,
            machine,
            in_input: false,
            text_field: None,
            text: String::new(),
        })
    }

    /// Handle a child element. `has_body` is false for self-closing tags.
    fn child(&mut self, e: &BytesStart<'_>, has_body: bool) -> Result<(), CatalogError> {
        let name = e.name();
        let tag = name.as_ref();

        if let Some(field) = TextField::from_tag(tag) {
            if has_body {
                self.text_field = Some(field);
                self.text.clear();
            }
            return Ok(());
        }

        match tag {
            b"display" => {
                if self.machine.display.is_none() {
                    let rotation = attr_value(e, b"rotate")?
                        .and_then(|r| r.trim().parse().ok())
                        .unwrap_or(0);
                    self.machine.display = Some(Display { rotation });
                }
            }
            b"input" => {
                self.machine.input = Some(Input {
                    players: attr_value(e, b"players")?.and_then(|p| p.trim().parse().ok()),
                    buttons: attr_value(e, b"buttons")?.and_then(|b| b.trim().parse().ok()),
                    controls: Vec::new(),
                });
                self.in_input = has_body;
            }
            b"control" => {
                let control = parse_control(e)?;
                match self.machine.input {
                    Some(ref mut input) if self.in_input => input.controls.push(control),
                    _ => self.machine.loose_controls.push(control),
                }
            }
            b"driver" => {
                if self.machine.driver_status.is_none() {
                    self.machine.driver_status = attr_value(e, b"status")?.and_then(non_empty);
                }
            }
            b"disk" => {
                if let Some(name) = attr_value(e, b"name")?.and_then(non_empty) {
                    self.machine.disks.push(name);
                }
            }
            b"sample" => {
                if let Some(name) = attr_value(e, b"name")?.and_then(non_empty) {
                    self.machine.samples.push(name);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        if self.text_field.is_some() {
            self.text.push_str(text);
        }
    }

    fn close_child(&mut self, tag: &[u8]) {
        if tag == b"input" {
            self.in_input = false;
        }
        let Some(field) = self.text_field else {
            return;
        };
        if field.tag() != tag {
            return;
        }
        self.text_field = None;
        let text = std::mem::take(&mut self.text).trim().to_string();
        match field {
            TextField::Description => self.machine.description = text,
            TextField::Year => self.machine.year = non_empty(text),
            TextField::Manufacturer => self.machine.manufacturer = non_empty(text),
            TextField::Category => self.machine.category = non_empty(text),
        }
    }

    fn finish(self) -> (EntryKind, MachineRecord) {
        (self.kind, self.machine)
    }
}

fn parse_control(e: &BytesStart<'_>) -> Result<Control, CatalogError> {
    let mut kind = String::new();
    let mut ways = [None, None, None];

    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.into_owned();
        match attr.key.as_ref() {
            b"type" => kind = value,
            b"ways" => ways[0] = non_empty(value),
            b"ways2" => ways[1] = non_empty(value),
            b"ways3" => ways[2] = non_empty(value),
            _ => {}
        }
    }

    let [w1, w2, w3] = ways;
    Ok(Control {
        kind,
        ways: w1.or(w2).or(w3),
    })
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, CatalogError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
