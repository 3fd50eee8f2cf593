use ndarray::{ArrayD, IxDyn};

use crate::config::LoadRequest;
use crate::format::FormatTag;
use crate::sources::VolumeLoader;
use crate::{LoadError, LoadResult};

const SAMPLE_BYTES: usize = std::mem::size_of::<f64>();

/// Loader for headerless little-endian `f64` dumps in C order.
///
/// The shape comes from the request's hint.
pub struct RawLoader;

impl VolumeLoader for RawLoader {
    fn format(&self) -> FormatTag {
        FormatTag::Raw
    }

    fn load(&self, request: &LoadRequest) -> LoadResult<ArrayD<f64>> {
        let shape = request.hinted_shape()?;
        let bytes = std::fs::read(&request.path)?;
        decode(&bytes, &shape)
    }
}

fn decode(bytes: &[u8], shape: &[usize]) -> LoadResult<ArrayD<f64>> {
    let expected: usize = shape.iter().product();
    if bytes.len() % SAMPLE_BYTES != 0 {
        return Err(LoadError::InvalidData(format!(
            "{} bytes is not a whole number of f64 samples",
            bytes.len()
        )));
    }

    let actual = bytes.len() / SAMPLE_BYTES;
    if actual != expected {
        return Err(LoadError::ShapeMismatch { expected, actual });
    }

    let samples: Vec<f64> = bytes
        .chunks_exact(SAMPLE_BYTES)
        .map(|chunk| {
            let mut raw = [0u8; SAMPLE_BYTES];
            raw.copy_from_slice(chunk);
            f64::from_le_bytes(raw)
        })
        .collect();

    ArrayD::from_shape_vec(IxDyn(shape), samples).map_err(|e| LoadError::InvalidData(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(values: &[f64]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn test_load_with_shape_hint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.raw");
        let values: Vec<f64> = (0..12).map(|v| v as f64 - 6.0).collect();
        std::fs::write(&path, encode(&values)).unwrap();

        let request = LoadRequest::new(&path, FormatTag::Raw).with_shape_hint([2, 3, 2]);
        let array = RawLoader.load(&request).unwrap();
        assert_eq!(array.shape(), &[2, 3, 2]);
        assert_eq!(array[[0, 0, 0]], -6.0);
        assert_eq!(array[[1, 2, 1]], 5.0);
    }

    #[test]
    fn test_sample_count_must_match_hint() {
        let bytes = encode(&[1.0, 2.0, 3.0]);
        match decode(&bytes, &[2, 2]) {
            Err(LoadError::ShapeMismatch { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_truncated_sample() {
        let mut bytes = encode(&[1.0, 2.0]);
        bytes.pop();
        assert!(matches!(decode(&bytes, &[2]), Err(LoadError::InvalidData(_))));
    }

    #[test]
    fn test_missing_hint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.raw");
        std::fs::write(&path, encode(&[1.0])).unwrap();

        let request = LoadRequest::new(&path, FormatTag::Raw);
        assert!(matches!(RawLoader.load(&request), Err(LoadError::ShapeHintRequired(_))));
    }
}
