use lifegrid_lib::{
    count_live_neighbors, rules::transition, step, Config, Error as LifeError, Fill,
    State::{Alive, Dead},
    World,
};
use std::error::Error;

const BLINKER_H: &str = ".....\n\
                         .....\n\
                         .ooo.\n\
                         .....\n\
                         .....\n";

const BLINKER_V: &str = ".....\n\
                         ..o..\n\
                         ..o..\n\
                         ..o..\n\
                         .....\n";

#[test]
fn rule_table() {
    for n in 0..=8 {
        let alive = if n == 2 || n == 3 { Alive } else { Dead };
        let dead = if n == 3 { Alive } else { Dead };
        assert_eq!(transition(Alive, n), alive, "alive with {} neighbors", n);
        assert_eq!(transition(Dead, n), dead, "dead with {} neighbors", n);
    }
}

#[test]
fn full_3x3_neighbors() -> Result<(), Box<dyn Error>> {
    let world = Config::new(3).set_fill(Fill::Alive).world()?;
    let counts: Vec<Vec<u8>> = (0..3)
        .map(|y| {
            (0..3)
                .map(|x| count_live_neighbors(&world, (x, y)))
                .collect()
        })
        .collect();
    assert_eq!(counts, vec![vec![3, 5, 3], vec![5, 8, 5], vec![3, 5, 3]]);
    Ok(())
}

#[test]
fn neighbors_in_range() -> Result<(), Box<dyn Error>> {
    let worlds = [
        Config::new(1).set_fill(Fill::Alive).world()?,
        Config::new(4).set_fill(Fill::Alive).world()?,
        Config::new(7).set_seed(7).set_sample_count(30).world()?,
        BLINKER_H.parse::<World>()?,
    ];
    for world in &worlds {
        let size = world.size() as isize;
        for y in -1..=size {
            for x in -1..=size {
                assert!(world.count_live_neighbors((x, y)) <= 8);
            }
        }
    }
    Ok(())
}

#[test]
fn no_wraparound() -> Result<(), Box<dyn Error>> {
    let world: World = "o...\n\
                        ....\n\
                        ....\n\
                        ...o\n"
        .parse()?;
    assert_eq!(world.count_live_neighbors((0, 0)), 0);
    assert_eq!(world.count_live_neighbors((3, 3)), 0);
    assert_eq!(world.count_live_neighbors((1, 1)), 1);
    assert_eq!(world.count_live_neighbors((-1, -1)), 1);
    assert_eq!(world.count_live_neighbors((4, 4)), 1);
    assert_eq!(world.count_live_neighbors((10, 0)), 0);
    assert_eq!(world.get_cell_state((4, 0)), None);
    assert_eq!(world.get_cell_state((0, -1)), None);
    Ok(())
}

#[test]
fn extreme_coordinates() -> Result<(), Box<dyn Error>> {
    let world = World::new(3, Alive)?;
    assert_eq!(world.count_live_neighbors((isize::MAX, 0)), 0);
    assert_eq!(world.count_live_neighbors((0, isize::MIN)), 0);
    assert_eq!(world.count_live_neighbors((isize::MIN, isize::MAX)), 0);
    assert_eq!(world.get_cell_state((isize::MAX, isize::MAX)), None);
    Ok(())
}

#[test]
fn isolated_cell_dies() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(3).set_fill(Fill::Dead).world()?;
    world.set_cell((1, 1), Alive)?;
    assert!(world.step().is_empty());

    let corner: World = "o.\n..\n".parse()?;
    assert!(corner.step().is_empty());
    Ok(())
}

#[test]
fn blinker() -> Result<(), Box<dyn Error>> {
    let horizontal: World = BLINKER_H.parse()?;
    let vertical: World = BLINKER_V.parse()?;
    assert_eq!(step(&horizontal), vertical);
    assert_eq!(step(&vertical), horizontal);
    assert_eq!(horizontal.generations().nth(1), Some(horizontal.clone()));
    Ok(())
}

#[test]
fn block() -> Result<(), Box<dyn Error>> {
    let block: World = "....\n\
                        .oo.\n\
                        .oo.\n\
                        ....\n"
        .parse()?;
    assert_eq!(block.step(), block);
    Ok(())
}

#[test]
fn glider() -> Result<(), Box<dyn Error>> {
    let glider: World = ".o....\n\
                         ..o...\n\
                         ooo...\n\
                         ......\n\
                         ......\n\
                         ......\n"
        .parse()?;
    let moved: World = "......\n\
                        ..o...\n\
                        ...o..\n\
                        .ooo..\n\
                        ......\n\
                        ......\n"
        .parse()?;
    assert_eq!(glider.generations().nth(3), Some(moved));
    Ok(())
}

#[test]
fn glider_at_edge() -> Result<(), Box<dyn Error>> {
    // Cells pushed over the edge are lost, and what remains settles into a block.
    let world: World = "....\n\
                        ..o.\n\
                        ...o\n\
                        .ooo\n"
        .parse()?;
    let block: World = "....\n\
                        ....\n\
                        ..oo\n\
                        ..oo\n"
        .parse()?;
    assert_eq!(world.generations().nth(3), Some(block));
    Ok(())
}

#[test]
fn empty_stays_empty() -> Result<(), Box<dyn Error>> {
    for size in 1..=8 {
        let world = Config::new(size).set_fill(Fill::Dead).world()?;
        let next = world.step();
        assert!(next.is_empty());
        assert_eq!(next, world);
    }
    Ok(())
}

#[test]
fn step_is_pure() -> Result<(), Box<dyn Error>> {
    let world = Config::new(12).set_seed(42).set_sample_count(60).world()?;
    let before = world.clone();
    let next = world.step();
    assert_eq!(world, before);
    assert_eq!(next.size(), world.size());

    let blinker: World = BLINKER_H.parse()?;
    let _ = blinker.step();
    assert_eq!(blinker.to_string(), BLINKER_H);
    Ok(())
}

#[test]
fn constant_fill() -> Result<(), Box<dyn Error>> {
    for size in 1..=10 {
        for (fill, state) in [(Fill::Alive, Alive), (Fill::Dead, Dead)] {
            let world = Config::new(size).set_fill(fill).world()?;
            assert_eq!(world.size(), size as usize);
            assert!(world.rows().flatten().all(|&s| s == state));
            assert_eq!(world.rows().count(), size as usize);
        }
    }
    Ok(())
}

#[test]
fn random_fill() -> Result<(), Box<dyn Error>> {
    let config = Config::new(20).set_sample_count(100).set_seed(2019);
    let world = config.world()?;
    assert_eq!(world, config.world()?);
    assert!(world.cell_count() > 0);
    assert!(world.cell_count() <= 100);

    let full = Config::new(1).set_sample_count(3).world()?;
    assert_eq!(full.get_cell_state((0, 0)), Some(Alive));

    let none = Config::new(6).set_sample_count(0).world()?;
    assert!(none.is_empty());
    Ok(())
}

#[test]
fn default_config() -> Result<(), Box<dyn Error>> {
    let config = Config::default();
    assert_eq!(config.size, 50);
    assert_eq!(config.fill, Fill::Random);
    assert_eq!(config.sample_count, 500);
    let world = config.world()?;
    assert_eq!(world.size(), 50);
    assert!(world.cell_count() <= 500);
    Ok(())
}

#[test]
fn non_positive_size() {
    assert_eq!(Config::new(0).world(), Err(LifeError::NonPositiveError));
    assert_eq!(
        Config::new(-3).set_fill(Fill::Alive).world(),
        Err(LifeError::NonPositiveError)
    );
    assert_eq!(World::new(0, Dead), Err(LifeError::NonPositiveError));
    assert_eq!(World::from_rows(Vec::new()), Err(LifeError::NonPositiveError));
}

#[test]
fn malformed_rows() {
    assert_eq!(
        World::from_rows(vec![vec![Dead, Dead], vec![Dead]]),
        Err(LifeError::NonSquareError {
            row: 1,
            len: 1,
            size: 2
        })
    );
    assert_eq!(
        "...\n...\n".parse::<World>(),
        Err(LifeError::NonSquareError {
            row: 0,
            len: 3,
            size: 2
        })
    );
    assert_eq!(
        "..\n.x\n".parse::<World>(),
        Err(LifeError::InvalidChar {
            ch: 'x',
            coord: (1, 1)
        })
    );
}

#[test]
fn set_cell() -> Result<(), Box<dyn Error>> {
    let mut world = World::new(3, Dead)?;
    world.set_cell((2, 0), Alive)?;
    assert_eq!(world.get_cell_state((2, 0)), Some(Alive));
    assert_eq!(world.cell_count(), 1);
    assert_eq!(
        world.set_cell((3, 0), Alive),
        Err(LifeError::SetCellError((3, 0)))
    );
    assert_eq!(
        world.set_cell((0, -1), Alive),
        Err(LifeError::SetCellError((0, -1)))
    );
    Ok(())
}

#[test]
fn display() -> Result<(), Box<dyn Error>> {
    let world: World = "! A blinker.\n\
                        ...\n\
                        OOO\n\
                        ...\n\
                        \n"
        .parse()?;
    assert_eq!(world.to_string(), "...\nooo\n...\n");
    assert_eq!(
        world.rle(),
        String::from(
            "x = 3, y = 3, rule = B3/S23\n\
             ...$\n\
             ooo$\n\
             ...!\n"
        )
    );
    assert_eq!(
        LifeError::NonSquareError {
            row: 1,
            len: 1,
            size: 2
        }
        .to_string(),
        "The world should be square: row 1 has 1 cells, expected 2."
    );
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn ser() -> Result<(), Box<dyn Error>> {
    let config = Config::new(8).set_sample_count(10).set_seed(3);
    let json = serde_json::to_string(&config)?;
    let new_config: Config = serde_json::from_str(&json)?;
    assert_eq!(new_config, config);
    assert_eq!(new_config.world()?, config.world()?);

    let partial: Config = serde_json::from_str(r#"{"size": 4, "fill": "alive"}"#)?;
    assert_eq!(partial, Config::new(4).set_fill(Fill::Alive));
    Ok(())
}
