use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trivia_core::quiz::{candidates, pick};
use trivia_core::{paginate, Pagination, Question, QuizScope, QUESTIONS_PER_PAGE};

fn arb_questions() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec((1..5i32, 1..6i32), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, difficulty))| Question {
                id: i as i32 + 1,
                question: format!("question {}", i + 1),
                answer: format!("answer {}", i + 1),
                category,
                difficulty,
            })
            .collect()
    })
}

proptest! {
    /// Property: a page never exceeds the page size and the total is always the full length
    #[test]
    fn prop_page_bounded(len in 0usize..200, page in -5i64..40) {
        let items: Vec<usize> = (0..len).collect();
        let result = paginate(&items, Pagination::new(page));

        prop_assert!(result.items.len() <= QUESTIONS_PER_PAGE);
        prop_assert_eq!(result.total, len as u64);
    }

    /// Property: a short page only happens on the last page or past the end
    #[test]
    fn prop_short_page_only_at_end(len in 0usize..200, page in 1i64..40) {
        let items: Vec<usize> = (0..len).collect();
        let pagination = Pagination::new(page);
        let result = paginate(&items, pagination);

        if result.items.len() < QUESTIONS_PER_PAGE {
            let consumed = pagination.offset() as usize + result.items.len();
            prop_assert_eq!(consumed.min(len), len);
        }
    }

    /// Property: pages are contiguous windows starting at (p-1)*10
    #[test]
    fn prop_page_is_window(len in 0usize..200, page in 1i64..40) {
        let items: Vec<usize> = (0..len).collect();
        let result = paginate(&items, Pagination::new(page));

        for (i, item) in result.items.iter().enumerate() {
            prop_assert_eq!(*item, (page as usize - 1) * QUESTIONS_PER_PAGE + i);
        }
    }

    /// Property: non-positive pages behave like page 1
    #[test]
    fn prop_non_positive_is_first_page(len in 0usize..50, page in i64::MIN..=0) {
        let items: Vec<usize> = (0..len).collect();
        prop_assert_eq!(
            paginate(&items, Pagination::new(page)),
            paginate(&items, Pagination::new(1))
        );
    }

    /// Property: the quiz never repeats a previous question
    #[test]
    fn prop_quiz_never_repeats(
        questions in arb_questions(),
        previous in prop::collection::hash_set(1..45i32, 0..30),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = candidates(&questions, QuizScope::All, &previous);
        let expected = questions.iter().filter(|q| !previous.contains(&q.id)).count();
        prop_assert_eq!(pool.len(), expected);

        match pick(pool, &mut rng) {
            Some(q) => prop_assert!(!previous.contains(&q.id)),
            None => prop_assert_eq!(expected, 0),
        }
    }

    /// Property: a category-scoped quiz stays inside its category
    #[test]
    fn prop_quiz_respects_category(questions in arb_questions(), category in 1..5i32, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = candidates(&questions, QuizScope::Category(category), &HashSet::new());
        if let Some(q) = pick(pool, &mut rng) {
            prop_assert_eq!(q.category, category);
        }
    }
}
