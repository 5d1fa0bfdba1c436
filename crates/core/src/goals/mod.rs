//! Goals module - savings goals, contributions, goal-linked expenses and
//! the progress calculator.

mod goals_model;
mod goals_repository;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod goals_service_tests;

pub use goals_model::{
    Goal, GoalCategory, GoalContribution, GoalExpense, GoalUpdate, GoalWithProgress,
    GoalWithSubgoals, NewGoal, NewGoalContribution, NewGoalExpense,
};
pub use goals_repository::GoalRepository;
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
