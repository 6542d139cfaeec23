use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::input::{DragSlopGate, SPAWN_DRAG_MIN_DISTANCE};
use crate::model::{AppSnapshot, BlockView, PaletteDragView, SplitMenuView};
use kazuburokku_core::{split_choices, BlockBoard, BlockId, BoardAction};

pub type AppSubscriber = Rc<dyn Fn()>;

pub struct AppCore {
    state: RefCell<AppState>,
    snapshots: RefCell<SnapshotBuffer>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

pub struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

struct DragState {
    block_id: BlockId,
    grab_dx: f32,
    grab_dy: f32,
    pointer_id: Option<i32>,
}

struct PaletteDrag {
    value: u32,
    gate: DragSlopGate,
    cursor_x: f32,
    cursor_y: f32,
    pointer_id: Option<i32>,
}

struct AppState {
    board: BlockBoard,
    drag: Option<DragState>,
    palette: Option<PaletteDrag>,
    overlap_target: Option<BlockId>,
    split_menu: Option<SplitMenuView>,
}

impl AppState {
    fn new() -> Self {
        Self {
            board: BlockBoard::new(),
            drag: None,
            palette: None,
            overlap_target: None,
            split_menu: None,
        }
    }
}

struct SnapshotBuffer {
    front: AppSnapshot,
    back: AppSnapshot,
}

impl SnapshotBuffer {
    fn new(state: &AppState) -> Self {
        let mut snapshot = AppSnapshot::default();
        fill_snapshot_from_state(state, &mut snapshot);
        Self {
            front: snapshot.clone(),
            back: snapshot,
        }
    }

    fn refresh_from_state(&mut self, state: &AppState) {
        fill_snapshot_from_state(state, &mut self.back);
        std::mem::swap(&mut self.front, &mut self.back);
    }
}

impl AppCore {
    pub fn new() -> Rc<Self> {
        let state = AppState::new();
        let snapshots = SnapshotBuffer::new(&state);
        Rc::new(Self {
            state: RefCell::new(state),
            snapshots: RefCell::new(snapshots),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        {
            let state = self.state.borrow();
            let mut snapshots = self.snapshots.borrow_mut();
            snapshots.refresh_from_state(&state);
        }
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }

    pub fn snapshot(&self) -> AppSnapshot {
        self.snapshots.borrow().front.clone()
    }

    pub fn spawn_block(&self, value: u32, x: f32, y: f32) -> BlockId {
        let id = self.state.borrow_mut().board.spawn(value, x, y);
        self.notify();
        id
    }

    pub fn remove_block(&self, block_id: BlockId) {
        let removed = self.state.borrow_mut().board.remove(block_id);
        if !removed {
            debug!("remove: block {:?} is not live", block_id);
            return;
        }
        self.notify();
    }

    pub fn begin_drag(&self, block_id: BlockId, x: f32, y: f32, pointer_id: Option<i32>) {
        let mut state = self.state.borrow_mut();
        let Some(block) = state.board.get(block_id).copied() else {
            debug!("begin drag: block {:?} is not live", block_id);
            return;
        };
        state.board.raise(block_id);
        state.drag = Some(DragState {
            block_id,
            grab_dx: x - block.x,
            grab_dy: y - block.y,
            pointer_id,
        });
        state.overlap_target = None;
        state.split_menu = None;
        drop(state);
        self.notify();
    }

    pub fn drag_move(&self, x: f32, y: f32) {
        let mut state = self.state.borrow_mut();
        let Some(drag) = state.drag.as_ref() else {
            return;
        };
        let block_id = drag.block_id;
        let next_x = x - drag.grab_dx;
        let next_y = y - drag.grab_dy;
        if !state.board.update_position(block_id, next_x, next_y) {
            debug!("drag move: block {:?} no longer live", block_id);
            state.drag = None;
            state.overlap_target = None;
        } else {
            state.overlap_target = state.board.check_overlap(block_id);
        }
        drop(state);
        self.notify();
    }

    pub fn drag_end(&self, pointer_id: Option<i32>) -> Option<BlockId> {
        let mut state = self.state.borrow_mut();
        let drag = state.drag.take()?;
        if drag.pointer_id.is_some() && pointer_id.is_none() {
            state.drag = Some(drag);
            return None;
        }
        if pointer_id.is_some() && drag.pointer_id != pointer_id {
            state.drag = Some(drag);
            return None;
        }
        let combined = state.board.finalize_combine(drag.block_id);
        if let Some(id) = combined {
            debug!("combine: {:?} absorbed into {:?}", drag.block_id, id);
        }
        state.overlap_target = None;
        drop(state);
        self.notify();
        combined
    }

    pub fn cancel_drag(&self) {
        let mut state = self.state.borrow_mut();
        if state.drag.take().is_none() {
            return;
        }
        state.overlap_target = None;
        drop(state);
        self.notify();
    }

    pub fn palette_press(&self, value: u32, x: f32, y: f32, pointer_id: Option<i32>) {
        let mut state = self.state.borrow_mut();
        state.palette = Some(PaletteDrag {
            value: value.max(1),
            gate: DragSlopGate::new(x, y, SPAWN_DRAG_MIN_DISTANCE),
            cursor_x: x,
            cursor_y: y,
            pointer_id,
        });
        drop(state);
        self.notify();
    }

    pub fn palette_move(&self, x: f32, y: f32) {
        let mut state = self.state.borrow_mut();
        let Some(palette) = state.palette.as_mut() else {
            return;
        };
        palette.cursor_x = x;
        palette.cursor_y = y;
        palette.gate.update(x, y);
        drop(state);
        self.notify();
    }

    pub fn palette_release(&self, pointer_id: Option<i32>) -> Option<BlockId> {
        let mut state = self.state.borrow_mut();
        let palette = state.palette.take()?;
        if palette.pointer_id.is_some() && pointer_id.is_none() {
            state.palette = Some(palette);
            return None;
        }
        if pointer_id.is_some() && palette.pointer_id != pointer_id {
            state.palette = Some(palette);
            return None;
        }
        let spawned = if palette.gate.moved() {
            Some(
                state
                    .board
                    .spawn(palette.value, palette.cursor_x, palette.cursor_y),
            )
        } else {
            debug!("palette release: tap short of the spawn threshold");
            None
        };
        drop(state);
        self.notify();
        spawned
    }

    pub fn open_split_menu(&self, block_id: BlockId, x: f32, y: f32) {
        let mut state = self.state.borrow_mut();
        let Some(block) = state.board.get(block_id).copied() else {
            debug!("split menu: block {:?} is not live", block_id);
            return;
        };
        if block.value <= 1 {
            debug!("split menu: value 1 has no split choices");
            return;
        }
        state.split_menu = Some(SplitMenuView {
            block_id,
            value: block.value,
            anchor: (x, y),
            choices: split_choices(block.value),
        });
        drop(state);
        self.notify();
    }

    pub fn close_split_menu(&self) {
        let mut state = self.state.borrow_mut();
        if state.split_menu.take().is_none() {
            return;
        }
        drop(state);
        self.notify();
    }

    pub fn choose_split(&self, block_id: BlockId, left_value: u32) -> Option<(BlockId, BlockId)> {
        let mut state = self.state.borrow_mut();
        state.split_menu = None;
        let result = state.board.split(block_id, left_value);
        if result.is_none() {
            debug!(
                "split: rejected {:?} with left value {}",
                block_id, left_value
            );
        }
        drop(state);
        self.notify();
        result
    }

    pub fn apply_action(&self, action: BoardAction) {
        match action {
            BoardAction::BeginDrag {
                block_id,
                x,
                y,
                pointer_id,
            } => self.begin_drag(block_id, x, y, pointer_id),
            BoardAction::DragMove { x, y } => self.drag_move(x, y),
            BoardAction::DragEnd { pointer_id } => {
                self.drag_end(pointer_id);
            }
            BoardAction::CancelDrag => self.cancel_drag(),
            BoardAction::PalettePress {
                value,
                x,
                y,
                pointer_id,
            } => self.palette_press(value, x, y, pointer_id),
            BoardAction::PaletteMove { x, y } => self.palette_move(x, y),
            BoardAction::PaletteRelease { pointer_id } => {
                self.palette_release(pointer_id);
            }
            BoardAction::OpenSplitMenu { block_id, x, y } => {
                self.open_split_menu(block_id, x, y)
            }
            BoardAction::CloseSplitMenu => self.close_split_menu(),
            BoardAction::ChooseSplit {
                block_id,
                left_value,
            } => {
                self.choose_split(block_id, left_value);
            }
            BoardAction::Remove { block_id } => self.remove_block(block_id),
        }
    }
}

fn fill_snapshot_from_state(state: &AppState, snapshot: &mut AppSnapshot) {
    snapshot.blocks.clear();
    snapshot
        .blocks
        .extend(state.board.blocks().iter().map(|block| BlockView {
            id: block.id,
            value: block.value,
            x: block.x,
            y: block.y,
        }));
    snapshot.active_id = state.drag.as_ref().map(|drag| drag.block_id);
    snapshot.overlap_target = state.overlap_target;
    snapshot.palette_drag = state.palette.as_ref().map(|palette| PaletteDragView {
        value: palette.value,
        x: palette.cursor_x,
        y: palette.cursor_y,
        armed: palette.gate.moved(),
    });
    snapshot.split_menu = state.split_menu.clone();
}
