use crate::classes;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PagePhase {
    #[default]
    Loading,
    Ready,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRecord {
    pub phase: PagePhase,
    pub printing: bool,
    pub before_print: bool,
}

impl PageRecord {
    pub fn classes(&self) -> Vec<&'static str> {
        let mut out = vec![match self.phase {
            PagePhase::Loading => classes::POSTER_LOADING,
            PagePhase::Ready => classes::POSTER_READY,
        }];
        if self.printing {
            out.push(classes::PRINTING);
        }
        if self.before_print {
            out.push(classes::BEFORE_PRINT);
        }
        out
    }
}
