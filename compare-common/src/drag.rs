use crate::frame::SliderFrame;
use crate::geometry::ContainerRect;

/// Drag state of a single slider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// One slider and the elements it is bound to.
///
/// `E` is whatever the host uses to reach the container, overlay and handle:
/// DOM element handles in the browser, an element id in a component, or
/// plain test fixtures.
#[derive(Debug, Clone)]
pub struct SliderInstance<E> {
    elements: E,
    state: DragState,
}

impl<E> SliderInstance<E> {
    pub fn new(elements: E) -> Self {
        Self {
            elements,
            state: DragState::Idle,
        }
    }

    pub fn elements(&self) -> &E {
        &self.elements
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Pointer went down on this slider's handle.
    pub fn begin_drag(&mut self) {
        self.state = DragState::Dragging;
    }

    /// Pointer went up somewhere. Returns whether a drag was actually ended.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    /// Compute the frame for a pointer at `client_x`.
    ///
    /// `measure` is only called while dragging, so idle sliders never touch
    /// layout. Returns `None` when idle, when the container can't be measured,
    /// or when it has no usable width.
    pub fn drag_to<F>(&self, client_x: f64, measure: F) -> Option<SliderFrame>
    where
        F: FnOnce(&E) -> Option<ContainerRect>,
    {
        if !self.is_dragging() {
            return None;
        }
        let rect = measure(&self.elements)?;
        rect.percentage_at(client_x).map(SliderFrame::at)
    }
}

/// Every slider bound on a page.
///
/// Pointer-down targets one instance, pointer-move is offered to all of them,
/// and pointer-up releases all of them regardless of which one started the
/// drag.
#[derive(Debug, Clone)]
pub struct SliderSet<E> {
    instances: Vec<SliderInstance<E>>,
}

impl<E> Default for SliderSet<E> {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
        }
    }
}

impl<E> FromIterator<E> for SliderSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            instances: iter.into_iter().map(SliderInstance::new).collect(),
        }
    }
}

impl<E> SliderSet<E> {
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SliderInstance<E>> {
        self.instances.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SliderInstance<E>> {
        self.instances.iter()
    }

    /// Start a drag on the slider at `index`. Returns false for an unknown index.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        match self.instances.get_mut(index) {
            Some(instance) => {
                instance.begin_drag();
                true
            }
            None => false,
        }
    }

    /// End every drag. Returns how many sliders were actually dragging.
    pub fn release_all(&mut self) -> usize {
        self.instances
            .iter_mut()
            .map(SliderInstance::release)
            .filter(|released| *released)
            .count()
    }

    pub fn dragging_count(&self) -> usize {
        self.instances.iter().filter(|s| s.is_dragging()).count()
    }

    /// Offer a pointer-move to every slider; collect the frames to apply.
    pub fn drag_to<F>(&self, client_x: f64, mut measure: F) -> Vec<(&E, SliderFrame)>
    where
        F: FnMut(&E) -> Option<ContainerRect>,
    {
        self.instances
            .iter()
            .filter_map(|instance| {
                instance
                    .drag_to(client_x, &mut measure)
                    .map(|frame| (instance.elements(), frame))
            })
            .collect()
    }
}
