//! Builders for hand-assembled `Cookies.binarycookies` buffers used in tests.

/// Encodes one cookie record.
pub struct RecordBuilder {
    name: String,
    value: String,
    domain: String,
    path: String,
    flags: i32,
    creation: f64,
    expiry: f64,
}

impl RecordBuilder {
    pub fn new(name: &str, value: &str, domain: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            domain: domain.to_string(),
            path: path.to_string(),
            flags: 0,
            creation: 0.0,
            expiry: 0.0,
        }
    }

    pub fn flags(mut self, flags: i32) -> Self {
        self.flags = flags;
        self
    }

    /// Mac absolute times.
    pub fn times(mut self, creation: f64, expiry: f64) -> Self {
        self.creation = creation;
        self.expiry = expiry;
        self
    }

    /// Record bytes without the leading size field.
    pub fn build_slice(&self) -> Vec<u8> {
        // Offsets count the 4-byte size field that precedes the slice.
        let strings_start = 4 + 52;
        let domain_offset = strings_start;
        let name_offset = domain_offset + self.domain.len() + 1;
        let path_offset = name_offset + self.name.len() + 1;
        let value_offset = path_offset + self.path.len() + 1;

        let mut out = Vec::new();
        out.extend_from_slice(&0i32.to_le_bytes());
        out.extend_from_slice(&self.flags.to_le_bytes());
        out.extend_from_slice(&0i32.to_le_bytes());
        for offset in [domain_offset, name_offset, path_offset, value_offset] {
            out.extend_from_slice(&(offset as i32).to_le_bytes());
        }
        out.extend_from_slice(&[0u8; 8]);
        out.extend_from_slice(&self.expiry.to_le_bytes());
        out.extend_from_slice(&self.creation.to_le_bytes());
        for s in [&self.domain, &self.name, &self.path, &self.value] {
            out.extend_from_slice(s.as_bytes());
            out.push(0);
        }
        out
    }

    /// Full record, prefixed by a size field that counts itself.
    pub fn build(&self) -> Vec<u8> {
        let slice = self.build_slice();
        let mut out = Vec::with_capacity(slice.len() + 4);
        out.extend_from_slice(&((slice.len() + 4) as i32).to_le_bytes());
        out.extend_from_slice(&slice);
        out
    }
}

/// Encodes one page: header, offset directory, footer, then records.
#[derive(Default)]
pub struct PageBuilder {
    records: Vec<Vec<u8>>,
    directory: Option<Vec<usize>>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(mut self, record: &RecordBuilder) -> Self {
        self.records.push(record.build());
        self
    }

    /// List records in the directory in this order (indices into the
    /// records as stored).
    pub fn directory(mut self, order: Vec<usize>) -> Self {
        self.directory = Some(order);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let order = self
            .directory
            .clone()
            .unwrap_or_else(|| (0..self.records.len()).collect());

        let mut offsets = Vec::with_capacity(self.records.len());
        let mut next = 4 + 4 + 4 * order.len() + 4;
        for record in &self.records {
            offsets.push(next);
            next += record.len();
        }

        let mut out = Vec::new();
        out.extend_from_slice(&[0x00, 0x00, 0x01, 0x00]);
        out.extend_from_slice(&(order.len() as i32).to_le_bytes());
        for index in order {
            out.extend_from_slice(&(offsets[index] as i32).to_le_bytes());
        }
        out.extend_from_slice(&[0u8; 4]);
        for record in &self.records {
            out.extend_from_slice(record);
        }
        out
    }
}

/// Encodes a whole container from already-built pages.
pub fn container(pages: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"cook");
    out.extend_from_slice(&(pages.len() as i32).to_be_bytes());
    for page in pages {
        out.extend_from_slice(&(page.len() as i32).to_be_bytes());
    }
    for page in pages {
        out.extend_from_slice(page);
    }
    // Checksum and footer; never consulted by the decoder.
    out.extend_from_slice(&[0u8; 4]);
    out.extend_from_slice(&[0x07, 0x17, 0x20, 0x05, 0x00, 0x00, 0x00, 0x4b]);
    out
}
