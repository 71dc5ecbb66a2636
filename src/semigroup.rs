//! Incremental enumeration of finite semigroups.
use std::collections::HashMap;
use std::fmt;
use std::mem::swap;

use log::debug;

use crate::element::Element;
use crate::error::Error;
use crate::recvec::RecVec;
use crate::report::{Observer, Progress};
use crate::{Gen, Pos, Word};

/// A finite semigroup generated by a set of elements.
///
/// The semigroup is the closure of its generators under composition. Elements are discovered
/// incrementally in breadth-first order over products of generators; each distinct element is
/// assigned a stable position the moment it is first seen, starting with the generators
/// themselves. Positions, factorisation words and Cayley graph entries never change once
/// assigned, so enumeration can be bounded with [`enumerate`](Semigroup::enumerate) and resumed
/// later without redoing any work.
///
/// Enumeration and the queries that force it take `&mut self`; queries over the elements known so
/// far take `&self`.
///
/// # Example
///
/// ```
/// use froidure::Semigroup;
/// use froidure::transformation::Transformation;
///
/// let mut s = Semigroup::new(vec![
///     Transformation::from_images(vec![1, 2, 0]).unwrap(),
///     Transformation::from_images(vec![2, 1, 0]).unwrap(),
/// ])
/// .unwrap();
/// // the symmetric group on three points
/// assert_eq!(s.size(), 6);
/// ```
pub struct Semigroup<T> {
    gens: Vec<T>,
    degree: usize,
    elems: Vec<T>,
    index: HashMap<T, Pos>,
    words: Vec<Word>,
    right: RecVec<Option<Pos>>,
    left: RecVec<Option<Pos>>,
    relations: Vec<(Word, Word)>,
    // The frontier is implicit: positions expand_pos.. are not yet fully expanded, and
    // expand_gen is the next untried generator for expand_pos.
    expand_pos: usize,
    expand_gen: usize,
    max_word_length: usize,
    reported_word_length: usize,
    begun: bool,
    idempotents: Option<usize>,
    observer: Option<Box<dyn Observer>>,
    scratch: T,
}

impl<T: Element> Semigroup<T> {
    /// Create a semigroup from a non-empty generating set.
    ///
    /// All generators must report the same degree. Generators equal by value share a single
    /// position (the first occurrence wins), but every input generator keeps its own column in
    /// the Cayley graphs and its own index in factorisation words.
    pub fn new(gens: Vec<T>) -> Result<Semigroup<T>, Error> {
        let first = gens.first().ok_or(Error::EmptyGeneratingSet)?;
        let degree = first.degree();
        for gen in gens.iter() {
            if gen.degree() != degree {
                return Err(Error::DegreeMismatch {
                    expected: degree,
                    found: gen.degree(),
                });
            }
        }

        let scratch = first.clone();
        let nr_gens = gens.len();
        let mut semigroup = Semigroup {
            gens,
            degree,
            elems: Vec::new(),
            index: HashMap::new(),
            words: Vec::new(),
            right: RecVec::new(nr_gens),
            left: RecVec::new(nr_gens),
            relations: Vec::new(),
            expand_pos: 0,
            expand_gen: 0,
            max_word_length: 0,
            reported_word_length: 0,
            begun: false,
            idempotents: None,
            observer: None,
            scratch,
        };

        for i in 0..nr_gens {
            let gen = semigroup.gens[i].clone();
            if semigroup.index.get(&gen).is_none() {
                semigroup.insert_new(gen, vec![i as Gen]);
            }
        }

        Ok(semigroup)
    }

    /// Create the monoid generated by a set of elements: the generators with an adjoined
    /// identity, which takes position 0 and generator index 0.
    ///
    /// Fails with [`Error::NoIdentity`] when the element kind has no identity.
    pub fn monoid(mut gens: Vec<T>) -> Result<Semigroup<T>, Error> {
        let first = gens.first().ok_or(Error::EmptyGeneratingSet)?;
        let one = first.identity().ok_or(Error::NoIdentity)?;
        gens.insert(0, one);
        Semigroup::new(gens)
    }

    /// The input generators, duplicates included.
    pub fn generators(&self) -> &[T] {
        &self.gens
    }

    /// The number of input generators.
    pub fn nr_generators(&self) -> usize {
        self.gens.len()
    }

    /// The common degree of the generators.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Whether the closure is complete.
    pub fn is_done(&self) -> bool {
        self.expand_pos >= self.elems.len()
    }

    /// Whether any enumeration step has run.
    pub fn is_begun(&self) -> bool {
        self.begun
    }

    /// The number of elements discovered so far, without enumerating any further.
    pub fn current_size(&self) -> usize {
        self.elems.len()
    }

    /// The number of elements of the semigroup.
    ///
    /// Forces a full enumeration; use [`current_size`](Semigroup::current_size) to inspect
    /// partial progress instead.
    pub fn size(&mut self) -> usize {
        self.enumerate(usize::max_value());
        self.elems.len()
    }

    /// The length of the longest factorisation word among the known elements.
    ///
    /// Monotonically non-decreasing across enumeration calls.
    pub fn current_max_word_length(&self) -> usize {
        self.max_word_length
    }

    /// Run the closure algorithm until at least `limit` elements are known or the closure is
    /// complete, whichever happens first.
    ///
    /// Calling with a limit at or below the number of known elements is a no-op. Calling with a
    /// higher limit resumes from the saved frontier state; no product is ever recomputed. The
    /// atomic unit of work is one (position, generator) pair, so a bounded run can finish at most
    /// one pair past the limit and resumes from exactly the next untried pair.
    pub fn enumerate(&mut self, limit: usize) {
        if self.is_done() || self.elems.len() >= limit {
            return;
        }
        self.begun = true;
        debug!(
            "enumerating to limit {} with {} elements known",
            limit,
            self.elems.len()
        );

        while self.expand_pos < self.elems.len() {
            if self.words[self.expand_pos].len() > self.reported_word_length {
                self.reported_word_length = self.words[self.expand_pos].len();
                self.report();
            }
            while self.expand_gen < self.gens.len() {
                if self.elems.len() >= limit {
                    self.report();
                    return;
                }
                let pos = self.expand_pos;
                let gen = self.expand_gen;
                self.apply_right(pos, gen);
                self.apply_left(pos, gen);
                self.expand_gen += 1;
            }
            self.expand_gen = 0;
            self.expand_pos += 1;
        }

        self.report();
    }

    /// The position of an element, enumerating as far as necessary to decide.
    ///
    /// Returns None when the element has a different degree or is not in the closure.
    pub fn position(&mut self, x: &T) -> Option<Pos> {
        if x.degree() != self.degree {
            return None;
        }
        if let Some(pos) = self.current_position(x) {
            return Some(pos);
        }
        self.enumerate(usize::max_value());
        self.current_position(x)
    }

    /// The position of an element among those known so far, without enumerating any further.
    ///
    /// Once this returns Some for an element, it returns the same position forever.
    pub fn current_position(&self, x: &T) -> Option<Pos> {
        self.index.get(x).copied()
    }

    /// Whether an element belongs to the semigroup. Forces enumeration as needed.
    pub fn test_membership(&mut self, x: &T) -> bool {
        self.position(x).is_some()
    }

    /// The element at a known position.
    pub fn at(&self, pos: Pos) -> Result<&T, Error> {
        self.elems.get(pos as usize).ok_or(Error::OutOfRange {
            position: pos as usize,
            known: self.elems.len(),
        })
    }

    /// The first-discovered factorisation of the element at a known position, as generator
    /// indices whose left-to-right product is the element.
    pub fn factorisation(&self, pos: Pos) -> Result<&[Gen], Error> {
        self.words
            .get(pos as usize)
            .map(|word| word.as_slice())
            .ok_or(Error::OutOfRange {
                position: pos as usize,
                known: self.elems.len(),
            })
    }

    /// The number of idempotents, elements with `e * e == e`. Forces a full enumeration.
    pub fn nr_idempotents(&mut self) -> usize {
        self.enumerate(usize::max_value());
        if let Some(count) = self.idempotents {
            return count;
        }
        let mut count = 0;
        for pos in 0..self.elems.len() {
            self.scratch.redefine(&self.elems[pos], &self.elems[pos]);
            if self.scratch == self.elems[pos] {
                count += 1;
            }
        }
        self.idempotents = Some(count);
        count
    }

    /// The right Cayley graph known so far: cell (p, g) is the position of `elems[p] * gens[g]`,
    /// or None when p has not yet been expanded by g.
    pub fn right_cayley_graph(&self) -> &RecVec<Option<Pos>> {
        &self.right
    }

    /// The left Cayley graph known so far: cell (p, g) is the position of `gens[g] * elems[p]`,
    /// or None when p has not yet been expanded by g.
    pub fn left_cayley_graph(&self) -> &RecVec<Option<Pos>> {
        &self.left
    }

    /// Defining relations of the semigroup: pairs of words over the generators with equal
    /// product, one for every right Cayley edge that rediscovers a known element.
    ///
    /// Forces a full enumeration. Together with the generators these present the semigroup, in
    /// the form consumed by congruence and rewriting engines.
    pub fn relations(&mut self) -> &[(Word, Word)] {
        self.enumerate(usize::max_value());
        &self.relations
    }

    /// Evaluate a word as a left-to-right product of generators.
    ///
    /// Returns None for the empty word and for words mentioning a generator index out of range.
    pub fn word_to_element(&self, word: &[Gen]) -> Option<T> {
        let mut letters = word.iter();
        let first = *letters.next()? as usize;
        let mut result = self.gens.get(first)?.clone();
        let mut scratch = result.clone();
        for &letter in letters {
            let gen = self.gens.get(letter as usize)?;
            scratch.redefine(&result, gen);
            swap(&mut result, &mut scratch);
        }
        Some(result)
    }

    /// Iterate over the elements known so far, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elems.iter()
    }

    /// Install an observer invoked at enumeration milestones.
    pub fn set_observer(&mut self, observer: impl Observer + 'static) {
        self.observer = Some(Box::new(observer));
    }

    // Record a newly discovered element. The element store, index table, word table and both
    // Cayley graphs grow together here and nowhere else.
    fn insert_new(&mut self, elem: T, word: Word) -> Pos {
        let pos = self.elems.len() as Pos;
        self.index.insert(elem.clone(), pos);
        self.elems.push(elem);
        if word.len() > self.max_word_length {
            self.max_word_length = word.len();
        }
        self.words.push(word);
        self.right.add_row(None);
        self.left.add_row(None);
        pos
    }

    fn apply_right(&mut self, pos: usize, gen: usize) {
        self.scratch.redefine(&self.elems[pos], &self.gens[gen]);
        let product_pos = match self.index.get(&self.scratch) {
            Some(&known) => {
                let mut lhs = self.words[pos].clone();
                lhs.push(gen as Gen);
                self.relations.push((lhs, self.words[known as usize].clone()));
                known
            }
            None => {
                let elem = self.scratch.clone();
                let mut word = self.words[pos].clone();
                word.push(gen as Gen);
                self.insert_new(elem, word)
            }
        };
        self.right.set(pos, gen, Some(product_pos));
    }

    fn apply_left(&mut self, pos: usize, gen: usize) {
        self.scratch.redefine(&self.gens[gen], &self.elems[pos]);
        let product_pos = match self.index.get(&self.scratch) {
            Some(&known) => known,
            None => {
                let elem = self.scratch.clone();
                let mut word = Word::with_capacity(self.words[pos].len() + 1);
                word.push(gen as Gen);
                word.extend_from_slice(&self.words[pos]);
                self.insert_new(elem, word)
            }
        };
        self.left.set(pos, gen, Some(product_pos));
    }

    fn report(&mut self) {
        let progress = Progress {
            nr_elements: self.elems.len(),
            nr_expanded: self.expand_pos,
            max_word_length: self.max_word_length,
            done: self.is_done(),
        };
        debug!(
            "found {} elements ({} expanded), word length {}{}",
            progress.nr_elements,
            progress.nr_expanded,
            progress.max_word_length,
            if progress.done { ", done" } else { "" }
        );
        if let Some(observer) = self.observer.as_mut() {
            observer.update(progress);
        }
    }
}

impl<T: Element> fmt::Debug for Semigroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<semigroup with {} generators and {} elements{}>",
            self.gens.len(),
            self.elems.len(),
            if self.is_done() { "" } else { " so far" }
        )
    }
}
