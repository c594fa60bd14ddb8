/// One-time gate that suppresses the entry animation of the first ring.
///
/// The gate starts pending and is closed exactly once, after the first
/// paint. Reading it never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstRender {
    pending: bool,
}

impl FirstRender {
    pub fn pending() -> Self {
        Self { pending: true }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Close the gate. Returns `true` only for the call that closed it.
    pub fn complete(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }
}

impl Default for FirstRender {
    fn default() -> Self {
        Self::pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_once() {
        let mut gate = FirstRender::pending();
        assert!(gate.is_pending());
        assert!(gate.complete());
        assert!(!gate.is_pending());
        assert!(!gate.complete());
        assert!(!gate.is_pending());
    }
}
