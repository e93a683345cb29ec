use csv::ReaderBuilder;
use log::*;
use sample_stats::Sample;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads `<index>;<measurement>` records, discarding the header line.
///
/// Reading stops at the first record that doesn't match that shape --
/// wrong field count, or either field failing to parse.  Anything after
/// it is ignored rather than reported as an error.
pub fn read_measurements(rdr: impl Read) -> Sample {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);
    let mut values = Vec::new();
    for record in rdr.records() {
        let record = match record {
            Ok(x) => x,
            Err(e) => {
                debug!("Stopping at unreadable record: {}", e);
                break;
            }
        };
        let parsed = if record.len() == 2 {
            record[0]
                .trim()
                .parse::<u64>()
                .ok()
                .and_then(|_idx| record[1].trim().parse::<f64>().ok())
        } else {
            None
        };
        match parsed {
            Some(x) => values.push(x),
            None => {
                debug!("Stopping at malformed record {:?}", record);
                break;
            }
        }
    }
    Sample::new(values)
}

/// A missing or unreadable file yields the empty sample; downstream
/// statistics then produce their zero sentinels instead of failing.
pub fn load_measurements(path: &Path) -> Sample {
    match File::open(path) {
        Ok(file) => read_measurements(file),
        Err(e) => {
            warn!("Couldn't read {}: {}", path.display(), e);
            Sample::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let input = "N;measurement\n10;1.0\n11;2.0\n12;3.0\n";
        let sample = read_measurements(input.as_bytes());
        assert_eq!(sample.values(), &[1., 2., 3.]);
        assert_eq!(sample.mean(), 2.);
        assert_eq!(sample.sum_of_squared_deviations(), 2.);
        assert_eq!(sample.unbiased_variance(), 1.);
        assert_eq!(sample.std_dev(), 1.);
    }

    #[test]
    fn stops_at_malformed_row() {
        let input = "N;measurement\n0;1.5\n1;2.5\noops\n2;9.0\n";
        let sample = read_measurements(input.as_bytes());
        assert_eq!(sample.values(), &[1.5, 2.5]);

        let input = "N;measurement\n0;1.5\n1;not-a-number\n2;9.0\n";
        let sample = read_measurements(input.as_bytes());
        assert_eq!(sample.values(), &[1.5]);

        let input = "N;measurement\n0;1.5\nx;2.5\n";
        let sample = read_measurements(input.as_bytes());
        assert_eq!(sample.values(), &[1.5]);
    }

    #[test]
    fn header_only_and_empty_input() {
        assert!(read_measurements("N;measurement\n".as_bytes()).is_empty());
        assert!(read_measurements("".as_bytes()).is_empty());
    }

    #[test]
    fn missing_file_is_an_empty_sample() {
        let sample = load_measurements(Path::new("/no/such/file.csv"));
        assert!(sample.is_empty());
        assert_eq!(sample.mean(), 0.);
    }
}
