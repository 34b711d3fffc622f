//! XPT stream reader.
//!
//! Parses the header and variable directory up front, then hands out
//! observation records one at a time as they are pulled.

use std::io::Read;

use crate::error::{Result, Section, XptError};
use crate::header::{
    HEADER_LEN, Header, Marker, RECORD_LEN, check_namestr_len, directory_padding,
    parse_header_records, parse_namestr_records,
};
use crate::source::RecordSource;
use crate::types::{ObservationRecord, Variable, VariableDirectory, XptReaderOptions};

/// XPT stream reader.
///
/// Construction consumes the header, the variable directory and the OBS
/// header; records are then pulled with [`next_record`](Self::next_record)
/// or by iterating.
///
/// ```no_run
/// use std::fs::File;
/// use xpt_decode::XptReader;
///
/// let mut reader = XptReader::new(File::open("ae.xpt")?)?;
/// println!("{}: {} variables", reader.header().dataset_name, reader.directory().len());
/// while let Some(record) = reader.next_record()? {
///     println!("{}", reader.field(&record, "AETERM")?);
/// }
/// # Ok::<(), xpt_decode::XptError>(())
/// ```
pub struct XptReader<R: Read> {
    header: Header,
    directory: VariableDirectory,
    observations: Observations<R>,
}

impl<R: Read> XptReader<R> {
    /// Parse the header and directory from `reader` with default options.
    pub fn new(reader: R) -> Result<Self> {
        Self::with_options(reader, XptReaderOptions::default())
    }

    /// Parse the header and directory from `reader`.
    pub fn with_options(reader: R, options: XptReaderOptions) -> Result<Self> {
        let mut source = RecordSource::new(reader);

        let header = read_header(&mut source)?;
        tracing::debug!(
            dataset = %header.dataset_name,
            sas_version = %header.sas_version,
            variables = header.variable_count,
            namestr_len = header.variable_record_size,
            "Parsed XPT header"
        );

        let variables = read_directory(&mut source, &header)?;
        let directory = VariableDirectory::new(variables).with_options(options.clone());
        tracing::debug!(
            variables = directory.len(),
            observation_width = directory.observation_width(),
            data_offset = source.offset(),
            "Parsed variable directory"
        );

        let observations = Observations {
            source,
            width: directory.observation_width(),
            allow_trailing_padding: options.allow_trailing_padding,
            records_read: 0,
            finished: false,
        };

        Ok(Self {
            header,
            directory,
            observations,
        })
    }

    /// Dataset metadata.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Variables in declaration order.
    #[must_use]
    pub fn directory(&self) -> &VariableDirectory {
        &self.directory
    }

    /// Read the next observation, or `None` once the data is exhausted.
    pub fn next_record(&mut self) -> Result<Option<ObservationRecord>> {
        self.observations.next_record()
    }

    /// Decode `name` in `record` as text.
    pub fn field(&self, record: &ObservationRecord, name: &str) -> Result<String> {
        self.directory.field(record, name)
    }

    /// Split into metadata and the record stream.
    #[must_use]
    pub fn into_parts(self) -> (Header, VariableDirectory, Observations<R>) {
        (self.header, self.directory, self.observations)
    }
}

impl<R: Read> Iterator for XptReader<R> {
    type Item = Result<ObservationRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.observations.next()
    }
}

/// Pull-based stream of fixed-width observation records.
///
/// Not restartable; after the end of data or any error it yields nothing.
pub struct Observations<R: Read> {
    source: RecordSource<R>,
    width: usize,
    allow_trailing_padding: bool,
    records_read: u64,
    finished: bool,
}

impl<R: Read> Observations<R> {
    /// Width of each record in bytes.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of records handed out so far.
    #[must_use]
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Read the next observation, or `None` once the data is exhausted.
    ///
    /// A record that starts but does not complete is a
    /// [`Truncation`](XptError::Truncation) error.
    pub fn next_record(&mut self) -> Result<Option<ObservationRecord>> {
        if self.finished || self.width == 0 {
            return Ok(None);
        }
        match self.read_record() {
            Ok(Some(record)) => Ok(Some(record)),
            other => {
                self.finished = true;
                other
            }
        }
    }

    fn read_record(&mut self) -> Result<Option<ObservationRecord>> {
        let offset = self.source.offset();
        let raw = self.source.take(self.width)?;

        if raw.is_empty() {
            tracing::debug!(records = self.records_read, "End of observations");
            return Ok(None);
        }

        if self.allow_trailing_padding
            && is_blank(&raw)
            && self.is_trailing_padding(raw.len())?
        {
            tracing::warn!(
                offset,
                bytes = raw.len(),
                "Skipping blank fill after the last observation"
            );
            return Ok(None);
        }

        if raw.len() < self.width {
            return Err(XptError::truncated(Section::Observation, self.width, raw.len()));
        }

        tracing::trace!(index = self.records_read, offset, "Read observation");
        self.records_read += 1;
        Ok(Some(ObservationRecord::new(raw)))
    }

    /// Whether `consumed` blank bytes plus everything left form the final
    /// fill, which never reaches a full 80-byte record.
    fn is_trailing_padding(&mut self, consumed: usize) -> Result<bool> {
        let rest = self.source.peek(RECORD_LEN)?;
        Ok(consumed + rest.len() < RECORD_LEN && is_blank(rest))
    }
}

impl<R: Read> Iterator for Observations<R> {
    type Item = Result<ObservationRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

impl<R: Read> std::iter::FusedIterator for Observations<R> {}

/// Consume and parse the eight fixed header records.
fn read_header<R: Read>(source: &mut RecordSource<R>) -> Result<Header> {
    let available = source.peek(HEADER_LEN)?.len();
    if available < HEADER_LEN {
        return Err(XptError::insufficient(Section::Header, available, HEADER_LEN));
    }
    let data = source.take(HEADER_LEN)?;
    parse_header_records(&data)
}

/// Consume the descriptors, the padding after them and the OBS header.
fn read_directory<R: Read>(
    source: &mut RecordSource<R>,
    header: &Header,
) -> Result<Vec<Variable>> {
    check_namestr_len(header.variable_record_size)?;

    let total = header.directory_len();
    let available = source.peek(total)?.len();
    if available < total {
        return Err(XptError::insufficient(
            Section::VariableDirectory,
            available,
            total,
        ));
    }
    let data = source.take(total)?;
    let variables = parse_namestr_records(
        &data,
        header.variable_count,
        header.variable_record_size,
    )?;

    let padding = directory_padding(header.variable_count, header.variable_record_size);
    let fill = source.take(padding)?;
    if fill.len() < padding {
        return Err(XptError::truncated(Section::Padding, padding, fill.len()));
    }

    let obs_header = source.take(RECORD_LEN)?;
    if obs_header.len() < RECORD_LEN {
        return Err(XptError::truncated(
            Section::ObservationHeader,
            RECORD_LEN,
            obs_header.len(),
        ));
    }
    Marker::Observation.expect(&obs_header)?;

    Ok(variables)
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == b' ')
}
