// Dashboard and panel identity models

/// Identifies the dashboard a panel belongs to. Both fields are opaque
/// strings supplied by the caller and used verbatim in the render path.
#[derive(Debug, Clone)]
pub struct DashboardIdentity {
    pub uid: String,
    pub title: String,
}

impl DashboardIdentity {
    pub fn new(uid: String, title: String) -> Self {
        Self { uid, title }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Panel {
    pub id: i64,
}

impl Panel {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}
