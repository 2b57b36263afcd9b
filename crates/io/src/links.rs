// Link CSV export: `a,b,class`, one row per link, sorted by pair.

use std::io::Write;
use std::path::Path;

use nbrcheck_recon::{Reconciliation, VertexId};
use serde::Serialize;

use crate::error::IoError;

#[derive(Serialize)]
struct LinkRow {
    a: VertexId,
    b: VertexId,
    class: &'static str,
}

pub fn write_links_csv<W: Write>(writer: W, recon: &Reconciliation) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["a", "b", "class"])?;
    for (pair, class) in recon.links() {
        wtr.serialize(LinkRow {
            a: pair.lo(),
            b: pair.hi(),
            class: class.as_str(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_links_csv_file(path: &Path, recon: &Reconciliation) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::write(path, e))?;
    write_links_csv(file, recon).map_err(|e| IoError::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbrcheck_recon::{reconcile, PairSet, UnorderedPair};

    fn pairs(list: &[(VertexId, VertexId)]) -> PairSet {
        list.iter().filter_map(|&(a, b)| UnorderedPair::new(a, b)).collect()
    }

    #[test]
    fn rows_sorted_with_header() {
        let recon = reconcile(&pairs(&[(2, 1), (5, 3)]), &pairs(&[(1, 2), (0, 4)]));
        let mut out = Vec::new();
        write_links_csv(&mut out, &recon).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a,b,class\n0,4,only_right\n1,2,common\n3,5,only_left\n"
        );
    }

    #[test]
    fn empty_reconciliation_writes_header_only() {
        let mut out = Vec::new();
        write_links_csv(&mut out, &Reconciliation::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a,b,class\n");
    }
}
