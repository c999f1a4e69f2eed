use crate::{DztError, DztResult};

/// Матрица выборок радарограммы.
///
/// Хранится по столбцам: столбец `col` — полная многоканальная трасса одного
/// скана, строки идут сначала по выборкам, затем по каналам. Такой порядок
/// совпадает с порядком слов в секции данных файла, поэтому плоский буфер
/// переносится без перестановки, а адресация задаётся явно через
/// [`SampleMatrix::index_of`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl SampleMatrix {
    /// Собирает матрицу из плоской последовательности выборок.
    ///
    /// `trace_len` — число строк (`samples_per_trace * num_channels`).
    /// Количество выборок должно быть кратно `trace_len`.
    pub fn from_flat(
        samples: Vec<i32>,
        trace_len: usize,
    ) -> DztResult<Self> {
        if trace_len == 0 || samples.len() % trace_len != 0 {
            return Err(DztError::IncompleteTrace {
                samples: samples.len(),
                trace_len,
            });
        }

        let cols = samples.len() / trace_len;

        Ok(Self {
            rows: trace_len,
            cols,
            data: samples,
        })
    }

    /// Пустая матрица с `rows` строками и нулём столбцов.
    pub fn empty(rows: usize) -> Self {
        Self {
            rows,
            cols: 0,
            data: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Отображение (row, col) → индекс в плоском буфере.
    pub fn index_of(
        &self,
        row: usize,
        col: usize,
    ) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(col * self.rows + row)
    }

    pub fn get(
        &self,
        row: usize,
        col: usize,
    ) -> Option<i32> {
        self.index_of(row, col).map(|i| self.data[i])
    }

    /// Полная многоканальная трасса скана `col`.
    pub fn column(
        &self,
        col: usize,
    ) -> Option<&[i32]> {
        if col >= self.cols {
            return None;
        }
        let start = col * self.rows;
        Some(&self.data[start..start + self.rows])
    }

    /// Трасса одного канала внутри столбца `col`.
    pub fn channel_trace(
        &self,
        col: usize,
        channel: usize,
        samples_per_trace: usize,
    ) -> Option<&[i32]> {
        let column = self.column(col)?;
        let start = channel.checked_mul(samples_per_trace)?;
        let end = start.checked_add(samples_per_trace)?;

        column.get(start..end)
    }

    /// Итератор по столбцам (трассам) слева направо.
    pub fn columns(&self) -> impl Iterator<Item = &[i32]> + '_ {
        // chunks_exact(0) паникует
        self.data.chunks_exact(self.rows.max(1))
    }

    /// Плоский буфер в порядке хранения (по столбцам).
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_shape() {
        let flat = vec![0i32; 512 * 2 * 10];
        let m = SampleMatrix::from_flat(flat, 512 * 2).unwrap();

        assert_eq!(m.shape(), (1024, 10));
    }

    #[test]
    fn test_reshape_incomplete_trace() {
        let flat = vec![0i32; 512 * 2 * 10 + 1];
        let err = SampleMatrix::from_flat(flat, 512 * 2).unwrap_err();

        assert!(matches!(
            err,
            DztError::IncompleteTrace {
                samples: 10_241,
                trace_len: 1_024
            }
        ));
    }

    #[test]
    fn test_zero_trace_len_rejected() {
        assert!(SampleMatrix::from_flat(vec![], 0).is_err());
    }

    #[test]
    fn test_index_mapping_column_major() {
        // 3 строки × 2 столбца: [0,1,2] | [3,4,5]
        let m = SampleMatrix::from_flat((0..6).collect(), 3).unwrap();

        assert_eq!(m.index_of(0, 0), Some(0));
        assert_eq!(m.index_of(2, 0), Some(2));
        assert_eq!(m.index_of(0, 1), Some(3));
        assert_eq!(m.index_of(3, 0), None);
        assert_eq!(m.index_of(0, 2), None);

        assert_eq!(m.get(1, 1), Some(4));
        assert_eq!(m.column(1).unwrap(), &[3, 4, 5]);
        assert!(m.column(2).is_none());
    }

    #[test]
    fn test_channel_trace_split() {
        // 2 канала по 4 выборки, 2 скана
        let flat: Vec<i32> = (0..16).collect();
        let m = SampleMatrix::from_flat(flat, 8).unwrap();

        assert_eq!(m.channel_trace(0, 0, 4).unwrap(), &[0, 1, 2, 3]);
        assert_eq!(m.channel_trace(0, 1, 4).unwrap(), &[4, 5, 6, 7]);
        assert_eq!(m.channel_trace(1, 1, 4).unwrap(), &[12, 13, 14, 15]);
        assert!(m.channel_trace(1, 2, 4).is_none());
    }

    #[test]
    fn test_columns_iterator() {
        let m = SampleMatrix::from_flat((0..6).collect(), 2).unwrap();
        let cols: Vec<_> = m.columns().collect();

        assert_eq!(cols.len(), 3);
        assert_eq!(cols[2], &[4, 5]);

        let empty = SampleMatrix::empty(4);
        assert_eq!(empty.shape(), (4, 0));
        assert_eq!(empty.columns().count(), 0);
    }
}
