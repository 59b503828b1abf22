// ============================================================================
// DEBOUNCE - Coalescer llamadas repetidas en una sola (trailing edge)
// ============================================================================

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Envuelve un callback de forma que llamadas repetidas dentro de la ventana
/// colapsan en una sola, ejecutada con los argumentos de la ÚLTIMA llamada.
/// Cada llamada dentro de la ventana reinicia el timer. Una vez armado, el
/// timer no se puede cancelar desde fuera, solo superseder con otra llamada.
pub struct Debouncer<T: 'static> {
    wait_ms: u32,
    callback: Rc<dyn Fn(T)>,
    timer: Rc<RefCell<Option<Timeout>>>,
    pending_args: Rc<RefCell<Option<T>>>,
}

impl<T: 'static> Debouncer<T> {
    pub fn new<F>(wait_ms: u32, callback: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            wait_ms,
            callback: Rc::new(callback),
            timer: Rc::new(RefCell::new(None)),
            pending_args: Rc::new(RefCell::new(None)),
        }
    }

    /// Registrar una llamada. Guarda los argumentos y rearma el timer.
    pub fn call(&self, args: T) {
        *self.pending_args.borrow_mut() = Some(args);

        // Superseder el timer anterior si seguía armado
        if let Some(previous) = self.timer.borrow_mut().take() {
            previous.cancel();
        }

        let callback = self.callback.clone();
        let timer = self.timer.clone();
        let pending_args = self.pending_args.clone();

        let timeout = Timeout::new(self.wait_ms, move || {
            timer.borrow_mut().take();
            if let Some(args) = pending_args.borrow_mut().take() {
                callback(args);
            }
        });
        *self.timer.borrow_mut() = Some(timeout);
    }
}

impl<T: 'static> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            wait_ms: self.wait_ms,
            callback: self.callback.clone(),
            timer: self.timer.clone(),
            pending_args: self.pending_args.clone(),
        }
    }
}
