// Last known pointer position, unknown until the first move event

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Option<[f64; 2]>,
    pub radius: f64,
}

impl PointerState {
    pub fn new(radius: f64) -> Self {
        PointerState { pos: None, radius }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = Some([x, y]);
    }
}
