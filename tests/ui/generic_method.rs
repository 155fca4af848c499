use handle_result::{handle, Val, Vals};

struct Table<T> {
    rows: Vec<T>,
}

impl<T: Clone + Default> Table<T> {
    #[handle]
    fn pair(&self, a: usize, b: usize) -> Vals<T, T> {
        let x = Val::from_slice(&self.rows, a).or_error("first")?;
        let y = Val::from_slice(&self.rows, b).or_error("second")?;
        Vals::new(x, y)
    }
}

fn main() {
    let t = Table { rows: vec![1, 2, 3] };
    assert_eq!(t.pair(0, 2).or_use(0, 0), (1, 3));
    assert_eq!(
        t.pair(0, 5).message(),
        "second: Index 5 out of bounds for slice of len 3"
    );
}
