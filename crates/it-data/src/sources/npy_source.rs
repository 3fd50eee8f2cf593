use std::fs::File;
use std::io::{BufReader, Read};
use ndarray::{ArrayD, IxDyn, ShapeBuilder};
use npyz::{DType, NpyFile, Order, TypeChar};

use crate::config::LoadRequest;
use crate::format::FormatTag;
use crate::sources::VolumeLoader;
use crate::{LoadError, LoadResult};

/// Loader for Numpy `.npy` files
pub struct NpyLoader;

impl VolumeLoader for NpyLoader {
    fn format(&self) -> FormatTag {
        FormatTag::Npy
    }

    fn load(&self, request: &LoadRequest) -> LoadResult<ArrayD<f64>> {
        let file = File::open(&request.path)?;
        read_npy(BufReader::new(file))
    }
}

/// Parse an `.npy` stream into `f64` samples, honouring C and Fortran order
pub fn read_npy<R: Read>(reader: R) -> LoadResult<ArrayD<f64>> {
    let npy = NpyFile::new(reader).map_err(|e| LoadError::InvalidData(format!("npy header: {}", e)))?;

    let shape: Vec<usize> = npy.shape().iter().map(|&n| n as usize).collect();
    let fortran = matches!(npy.order(), Order::Fortran);
    let data = read_samples(npy)?;

    let dims = if fortran { IxDyn(&shape).f() } else { IxDyn(&shape).into_shape() };
    ArrayD::from_shape_vec(dims, data).map_err(|e| LoadError::InvalidData(e.to_string()))
}

fn read_samples<R: Read>(npy: NpyFile<R>) -> LoadResult<Vec<f64>> {
    let type_str = match npy.dtype() {
        DType::Plain(type_str) => type_str,
        other => {
            return Err(LoadError::InvalidData(format!(
                "unsupported npy dtype {}",
                other.descr()
            )))
        }
    };

    let samples = match (type_str.type_char(), type_str.size_field()) {
        (TypeChar::Float, 8) => npy.into_vec::<f64>(),
        (TypeChar::Float, 4) => widen(npy.into_vec::<f32>()),
        (TypeChar::Int, 1) => widen(npy.into_vec::<i8>()),
        (TypeChar::Int, 2) => widen(npy.into_vec::<i16>()),
        (TypeChar::Int, 4) => widen(npy.into_vec::<i32>()),
        (TypeChar::Int, 8) => npy
            .into_vec::<i64>()
            .map(|v| v.into_iter().map(|x| x as f64).collect()),
        (TypeChar::Uint, 1) => widen(npy.into_vec::<u8>()),
        (TypeChar::Uint, 2) => widen(npy.into_vec::<u16>()),
        (TypeChar::Uint, 4) => widen(npy.into_vec::<u32>()),
        (TypeChar::Uint, 8) => npy
            .into_vec::<u64>()
            .map(|v| v.into_iter().map(|x| x as f64).collect()),
        (TypeChar::Bool, _) => npy
            .into_vec::<bool>()
            .map(|v| v.into_iter().map(|x| if x { 1.0 } else { 0.0 }).collect()),
        _ => {
            return Err(LoadError::InvalidData(format!(
                "unsupported npy dtype {}",
                type_str
            )))
        }
    };

    samples.map_err(|e| LoadError::InvalidData(format!("npy data: {}", e)))
}

fn widen<T: Into<f64>>(values: std::io::Result<Vec<T>>) -> std::io::Result<Vec<f64>> {
    values.map(|v| v.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use npyz::{WriteOptions, WriterBuilder};

    fn write_f64(path: &Path, shape: &[u64], data: &[f64], order: Order) {
        let mut buf = Vec::new();
        let mut writer = WriteOptions::<f64>::new()
            .default_dtype()
            .shape(shape)
            .order(order)
            .writer(&mut buf)
            .begin_nd()
            .unwrap();
        writer.extend(data.iter().copied()).unwrap();
        writer.finish().unwrap();
        std::fs::write(path, buf).unwrap();
    }

    #[test]
    fn test_load_c_order_volume() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube.npy");
        let data: Vec<f64> = (0..24).map(|v| v as f64 * 0.5).collect();
        write_f64(&path, &[2, 3, 4], &data, Order::C);

        let array = NpyLoader.load(&LoadRequest::new(&path, FormatTag::Npy)).unwrap();
        assert_eq!(array.shape(), &[2, 3, 4]);
        assert_eq!(array[[1, 2, 3]], 11.5);
        assert_eq!(array[[0, 1, 0]], 2.0);
    }

    #[test]
    fn test_load_fortran_order_volume() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cube_f.npy");
        let data: Vec<f64> = (0..6).map(|v| v as f64).collect();
        write_f64(&path, &[2, 3], &data, Order::Fortran);

        let array = NpyLoader.load(&LoadRequest::new(&path, FormatTag::Npy)).unwrap();
        assert_eq!(array.shape(), &[2, 3]);
        // column-major: element (i, j) sits at i + 2 * j
        assert_eq!(array[[1, 0]], 1.0);
        assert_eq!(array[[0, 1]], 2.0);
        assert_eq!(array[[1, 2]], 5.0);
    }

    #[test]
    fn test_integer_samples_are_widened() {
        let mut buf = Vec::new();
        let mut writer = WriteOptions::<i32>::new()
            .default_dtype()
            .shape(&[2, 2])
            .writer(&mut buf)
            .begin_nd()
            .unwrap();
        writer.extend([-3, 0, 7, 1_000_000]).unwrap();
        writer.finish().unwrap();

        let array = read_npy(&buf[..]).unwrap();
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![-3.0, 0.0, 7.0, 1e6]);
    }

    #[test]
    fn test_garbage_is_invalid_data() {
        let result = read_npy(&b"definitely not numpy"[..]);
        assert!(matches!(result, Err(LoadError::InvalidData(_))));
    }
}
