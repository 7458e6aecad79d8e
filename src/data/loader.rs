use crate::data::{Arity, CorrespondenceSet, Point2D};
use crate::error::MatchError;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load a whole match file into memory and parse it
pub fn load_correspondences<P: AsRef<Path>>(
    path: P,
    arity: Arity,
) -> Result<CorrespondenceSet, MatchError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| MatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let set = parse_correspondences(&content, arity)?;
    tracing::info!(
        path = %path.display(),
        correspondences = set.len(),
        arity = arity.points(),
        "Loaded match file"
    );
    Ok(set)
}

/// Parse match-file text: one correspondence per non-blank line,
/// `x1 y1 x2 y2 [x3 y3]` separated by whitespace.
pub fn parse_correspondences(content: &str, arity: Arity) -> Result<CorrespondenceSet, MatchError> {
    let mut set = CorrespondenceSet::new(arity);
    let expected = arity.values_per_line();
    let mut values = Vec::with_capacity(expected);
    let mut tuple = Vec::with_capacity(arity.points());

    // `lines` strips both "\n" and "\r\n"
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        values.clear();
        for token in line.split_whitespace() {
            let value: f64 = token
                .parse()
                .map_err(|_| parse_error(index, line, format!("invalid number '{}'", token)))?;
            if !value.is_finite() {
                return Err(parse_error(index, line, format!("non-finite value '{}'", token)));
            }
            values.push(value);
        }

        if values.len() != expected {
            return Err(parse_error(
                index,
                line,
                format!("expected {} values, found {}", expected, values.len()),
            ));
        }

        tuple.clear();
        tuple.extend(values.chunks_exact(2).map(|xy| Point2D::new(xy[0], xy[1])));
        set.push(&tuple)?;
    }

    Ok(set)
}

fn parse_error(index: usize, line: &str, reason: String) -> MatchError {
    MatchError::Parse {
        line: index + 1,
        content: line.to_string(),
        reason,
    }
}

/// Write a set in match-file layout. `f64` display is the shortest
/// representation that parses back to the same value.
pub fn write_correspondences<W: Write>(set: &CorrespondenceSet, writer: &mut W) -> std::io::Result<()> {
    for tuple in set.iter() {
        let line = tuple
            .iter()
            .map(|p| format!("{} {}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

pub fn save_correspondences<P: AsRef<Path>>(set: &CorrespondenceSet, path: P) -> Result<(), MatchError> {
    let path = path.as_ref();
    let to_io_error = |source: std::io::Error| MatchError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(to_io_error)?;
    let mut writer = BufWriter::new(file);
    write_correspondences(set, &mut writer).map_err(to_io_error)?;
    writer.flush().map_err(to_io_error)
}
