use crate::schedule::Scheduler;
use std::rc::Rc;
use std::time::Duration;

pub const INTERACTIVE_SELECTOR: &str = "a, button, .project-card, .skill-item, .contact-item";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn left(self) -> String {
        format!("{}px", self.x)
    }

    pub fn top(self) -> String {
        format!("{}px", self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorEmphasis {
    Resting,
    Hovering,
}

impl CursorEmphasis {
    pub fn lead_transform(self) -> &'static str {
        match self {
            Self::Resting => "scale(1)",
            Self::Hovering => "scale(1.5)",
        }
    }

    pub fn follower_transform(self) -> &'static str {
        match self {
            Self::Resting => "scale(1)",
            Self::Hovering => "scale(0.5)",
        }
    }
}

pub struct CursorTracker<S> {
    scheduler: S,
    follower_delay: Duration,
    lead: Rc<dyn Fn(Point)>,
    follower: Rc<dyn Fn(Point)>,
}

impl<S> CursorTracker<S>
where
    S: Scheduler,
{
    pub fn new(
        scheduler: S,
        follower_delay: Duration,
        lead: impl Fn(Point) + 'static,
        follower: impl Fn(Point) + 'static,
    ) -> Self {
        Self {
            scheduler,
            follower_delay,
            lead: Rc::new(lead),
            follower: Rc::new(follower),
        }
    }

    pub fn pointer_moved(&self, point: Point) {
        (self.lead)(point);

        let follower = Rc::clone(&self.follower);
        self.scheduler
            .schedule(self.follower_delay, Box::new(move || follower(point)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;
    use std::cell::RefCell;

    type Trace = Rc<RefCell<Vec<(Duration, Point)>>>;

    fn recorder(scheduler: &ManualScheduler, trace: &Trace) -> impl Fn(Point) + 'static {
        let scheduler = scheduler.clone();
        let trace = Rc::clone(trace);
        move |point| trace.borrow_mut().push((scheduler.now(), point))
    }

    #[test]
    fn follower_trails_lead_by_the_configured_delay() {
        let scheduler = ManualScheduler::new();
        let lead: Trace = Rc::default();
        let follower: Trace = Rc::default();
        let tracker = CursorTracker::new(
            scheduler.clone(),
            Duration::from_millis(100),
            recorder(&scheduler, &lead),
            recorder(&scheduler, &follower),
        );

        tracker.pointer_moved(Point::new(10.0, 20.0));
        scheduler.advance(Duration::from_millis(30));
        tracker.pointer_moved(Point::new(40.0, 50.0));
        assert_eq!(lead.borrow().len(), 2);
        assert!(follower.borrow().is_empty());

        scheduler.advance(Duration::from_millis(200));

        let lead = lead.borrow();
        let follower = follower.borrow();
        assert_eq!(follower.len(), 2);
        for ((lead_at, lead_point), (follower_at, follower_point)) in lead.iter().zip(follower.iter()) {
            assert_eq!(*follower_at - *lead_at, Duration::from_millis(100));
            assert_eq!(lead_point, follower_point);
        }
        assert_eq!(follower.last().map(|(_, point)| *point), Some(Point::new(40.0, 50.0)));
    }

    #[test]
    fn hover_emphasis_scales_in_opposite_directions() {
        assert_eq!(CursorEmphasis::Hovering.lead_transform(), "scale(1.5)");
        assert_eq!(CursorEmphasis::Hovering.follower_transform(), "scale(0.5)");
        assert_eq!(CursorEmphasis::Resting.lead_transform(), "scale(1)");
        assert_eq!(CursorEmphasis::Resting.follower_transform(), "scale(1)");
    }

    #[test]
    fn point_renders_pixel_offsets() {
        let point = Point::new(12.0, 7.5);

        assert_eq!(point.left(), "12px");
        assert_eq!(point.top(), "7.5px");
    }
}
