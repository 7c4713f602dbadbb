use parking_lot::{Mutex, RwLock};
use std::{cell::RefCell, ops::ControlFlow, rc::Rc, sync::Arc};

use crate::traits::{Algorithm, Status};

/// A trait for all kinds of terminators used in [`Algorithm`]s.
///
/// These can be implemented for different kinds of [`Algorithm`]s (`A`), problems (`P`),
/// [`Status`]es (`S`), user data (`U`), errors (`E`) and configurations (`C`). Terminators may
/// mutate both the [`Algorithm`] and its [`Status`].
///
/// <div class="warning">When an algorithm runs on a group of workers, every worker evaluates its
/// own terminators. A terminator must reach the same decision on every worker (for instance by
/// only looking at values the workers agreed on), otherwise the group deadlocks.</div>
pub trait Terminator<A, P, S, U, E, C>
where
    A: Algorithm<P, S, U, E, Config = C>,
    S: Status,
{
    /// A termination check which is called on each step of an [`Algorithm`].
    fn check_for_termination(
        &mut self,
        current_step: usize,
        algorithm: &mut A,
        problem: &P,
        status: &mut S,
        args: &U,
        config: &C,
    ) -> ControlFlow<()>;
}
impl<T, A, P, S, U, E, C> Terminator<A, P, S, U, E, C> for Rc<RefCell<T>>
where
    T: Terminator<A, P, S, U, E, C>,
    A: Algorithm<P, S, U, E, Config = C>,
    S: Status,
{
    fn check_for_termination(
        &mut self,
        current_step: usize,
        algorithm: &mut A,
        problem: &P,
        status: &mut S,
        args: &U,
        config: &C,
    ) -> ControlFlow<()> {
        self.borrow_mut().check_for_termination(
            current_step,
            algorithm,
            problem,
            status,
            args,
            config,
        )
    }
}
impl<T, A, P, S, U, E, C> Terminator<A, P, S, U, E, C> for Arc<Mutex<T>>
where
    T: Terminator<A, P, S, U, E, C>,
    A: Algorithm<P, S, U, E, Config = C>,
    S: Status,
{
    fn check_for_termination(
        &mut self,
        current_step: usize,
        algorithm: &mut A,
        problem: &P,
        status: &mut S,
        args: &U,
        config: &C,
    ) -> ControlFlow<()> {
        self.lock()
            .check_for_termination(current_step, algorithm, problem, status, args, config)
    }
}
impl<T, A, P, S, U, E, C> Terminator<A, P, S, U, E, C> for Arc<RwLock<T>>
where
    T: Terminator<A, P, S, U, E, C>,
    A: Algorithm<P, S, U, E, Config = C>,
    S: Status,
{
    fn check_for_termination(
        &mut self,
        current_step: usize,
        algorithm: &mut A,
        problem: &P,
        status: &mut S,
        args: &U,
        config: &C,
    ) -> ControlFlow<()> {
        self.write()
            .check_for_termination(current_step, algorithm, problem, status, args, config)
    }
}

/// A trait for all kinds of observers used in [`Algorithm`]s.
///
/// This is the most restrictive type of callback and is not able to mutate any of its inputs
/// aside from itself.
pub trait Observer<A, P, S, U, E, C>
where
    A: Algorithm<P, S, U, E, Config = C>,
    S: Status,
{
    /// An observation method which is called on each step of an [`Algorithm`].
    fn observe(
        &mut self,
        current_step: usize,
        algorithm: &A,
        problem: &P,
        status: &S,
        args: &U,
        config: &C,
    );
}
impl<O, A, P, S, U, E, C> Observer<A, P, S, U, E, C> for Rc<RefCell<O>>
where
    O: Observer<A, P, S, U, E, C>,
    A: Algorithm<P, S, U, E, Config = C>,
    S: Status,
{
    fn observe(
        &mut self,
        current_step: usize,
        algorithm: &A,
        problem: &P,
        status: &S,
        args: &U,
        config: &C,
    ) {
        self.borrow_mut()
            .observe(current_step, algorithm, problem, status, args, config)
    }
}
impl<O, A, P, S, U, E, C> Observer<A, P, S, U, E, C> for Arc<Mutex<O>>
where
    O: Observer<A, P, S, U, E, C>,
    A: Algorithm<P, S, U, E, Config = C>,
    S: Status,
{
    fn observe(
        &mut self,
        current_step: usize,
        algorithm: &A,
        problem: &P,
        status: &S,
        args: &U,
        config: &C,
    ) {
        self.lock()
            .observe(current_step, algorithm, problem, status, args, config)
    }
}
impl<O, A, P, S, U, E, C> Observer<A, P, S, U, E, C> for Arc<RwLock<O>>
where
    O: Observer<A, P, S, U, E, C>,
    A: Algorithm<P, S, U, E, Config = C>,
    S: Status,
{
    fn observe(
        &mut self,
        current_step: usize,
        algorithm: &A,
        problem: &P,
        status: &S,
        args: &U,
        config: &C,
    ) {
        self.write()
            .observe(current_step, algorithm, problem, status, args, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        algorithms::strongin::{Strongin, StronginConfig},
        core::{Callbacks, MaxSteps},
        test_functions::Parabola,
    };

    #[derive(Default)]
    struct Trivial(usize);
    impl<A, P, S, U, E, C> Terminator<A, P, S, U, E, C> for Trivial
    where
        A: Algorithm<P, S, U, E, Config = C>,
        S: Status,
    {
        fn check_for_termination(
            &mut self,
            _current_step: usize,
            _algorithm: &mut A,
            _problem: &P,
            _status: &mut S,
            _args: &U,
            _config: &C,
        ) -> ControlFlow<()> {
            self.0 += 1;
            ControlFlow::Continue(())
        }
    }
    impl<A, P, S, U, E, C> Observer<A, P, S, U, E, C> for Trivial
    where
        A: Algorithm<P, S, U, E, Config = C>,
        S: Status,
    {
        fn observe(
            &mut self,
            _current_step: usize,
            _algorithm: &A,
            _problem: &P,
            _status: &S,
            _args: &U,
            _config: &C,
        ) {
            self.0 += 1;
        }
    }

    #[test]
    fn check_all_callback_wrappers() {
        let rc_refcell = Rc::new(RefCell::new(Trivial::default()));
        let arc_mutex = Arc::new(Mutex::new(Trivial::default()));
        let arc_rwlock = Arc::new(RwLock::new(Trivial::default()));
        let res = Strongin::new()
            .process(
                &Parabola::default(),
                &(),
                StronginConfig::new(-1.0, 2.0),
                Callbacks::empty()
                    .with_terminator(rc_refcell.clone())
                    .with_terminator(arc_mutex.clone())
                    .with_terminator(arc_rwlock.clone())
                    .with_observer(rc_refcell.clone())
                    .with_observer(arc_mutex.clone())
                    .with_observer(arc_rwlock.clone())
                    .with_terminator(MaxSteps(5)),
            )
            .unwrap();
        // each wrapper is called as both an observer and a terminator on all 5 steps
        assert_eq!(rc_refcell.borrow().0, 10);
        assert_eq!(arc_mutex.lock().0, 10);
        assert_eq!(arc_rwlock.read().0, 10);
        assert!(!res.converged);
        assert_eq!(res.message, "Maximum number of steps reached (5)!");
    }
}
