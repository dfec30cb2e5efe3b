/// Every page and form target the quiz exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Start,
    Quiz,
    Results,
    Restart,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Welcome,
        Route::Start,
        Route::Quiz,
        Route::Results,
        Route::Restart,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Welcome => "/",
            Route::Start => "/start",
            Route::Quiz => "/quiz",
            Route::Results => "/results",
            Route::Restart => "/restart",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Route::Welcome => "Welcome page",
            Route::Start => "Begin a new attempt",
            Route::Quiz => "Show or answer the current question",
            Route::Results => "Show the final score",
            Route::Restart => "Discard the current attempt",
        }
    }
}
