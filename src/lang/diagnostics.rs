use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Error reporting strategy
///
/// Fatal conditions always come back as `Err`. Recoverable ones (currently
/// only constant redefinition) are handed to a `Diagnostics` which decides
/// whether compilation goes on.
pub trait Diagnostics {
    fn warning(&mut self, warning: Error) -> Result<()>;
}

/// Escalates every warning into an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Strict;

impl Diagnostics for Strict {
    fn warning(&mut self, warning: Error) -> Result<()> {
        Err(warning)
    }
}

/// Keeps warnings for later inspection and continues.
impl Diagnostics for Vec<Error> {
    fn warning(&mut self, warning: Error) -> Result<()> {
        self.push(warning);
        Ok(())
    }
}

impl<T: Diagnostics + ?Sized> Diagnostics for &mut T {
    fn warning(&mut self, warning: Error) -> Result<()> {
        (**self).warning(warning)
    }
}
