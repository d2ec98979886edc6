use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Schedule,
    Talk { talk_index: usize },
    Info,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Schedule => "Schedule",
            Route::Talk { .. } => "Talk",
            Route::Info => "Info",
        }
    }
}

pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Stack of visited routes. The bottom entry is always the schedule.
#[derive(Clone, Debug)]
pub struct RouteStack {
    stack: Vec<Route>,
}

impl Default for RouteStack {
    fn default() -> Self {
        Self {
            stack: vec![Route::Schedule],
        }
    }
}

impl RouteStack {
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Schedule)
    }

    /// Swap the top route, used when paging between talks in the detail view.
    pub fn replace(&mut self, route: Route) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.stack.push(route);
    }

    /// Pop one route. Returns the route that became current, or `None` when
    /// already at the root.
    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop();
        debug!(depth = self.depth(), "back");
        Some(self.current())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Navigator for RouteStack {
    fn navigate(&mut self, route: Route) {
        self.stack.push(route);
        debug!(screen = route.name(), depth = self.depth(), "navigate");
    }
}
