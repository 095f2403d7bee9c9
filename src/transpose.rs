/// Turns rows into columns without cloning the cells.
///
/// The width is taken from the first row; cells past it in longer rows are dropped.
pub fn transposed<T>(initial: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let width = initial.first().map_or(0, Vec::len);
    let mut transposed: Vec<Vec<T>> = (0..width)
        .map(|_| Vec::with_capacity(initial.len()))
        .collect();
    for row in initial {
        for (column, cell) in transposed.iter_mut().zip(row) {
            column.push(cell);
        }
    }
    transposed
}
