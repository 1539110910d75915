use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kindred_core::{FamilyTree, Gender, MemberId};

use crate::output::format::member_card;

/// Interactive session: a long-lived tree, commands on stdin, a `>>> `
/// prompt on stderr so piped output stays clean. Engine errors are printed
/// and the loop continues; unsaved changes require confirmation before they
/// are discarded by a load or an exit.
pub fn run(file: Option<&Path>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut tree = FamilyTree::new();
    let mut current_file: Option<PathBuf> = None;
    let mut dirty = false;

    if let Some(path) = file {
        tree.read_from_file(path)
            .with_context(|| format!("Failed to read tree from {}", path.display()))?;
        current_file = Some(path.to_path_buf());
    }

    loop {
        eprint!(">>> ");
        io::stderr().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let (cmd, rest) = next_token(&line);
        let Some(cmd) = cmd else {
            continue;
        };

        match cmd {
            "list_members" => {
                for (id, member) in tree.list_members() {
                    println!("{:>10} ... {}", id.as_u32(), member.name);
                }
            }
            "member_info" => {
                let Some(id) = parse_id_arg(rest) else {
                    continue;
                };
                match tree.get_member(id) {
                    Ok(member) => print!("{}", member_card(&tree, id, member)),
                    Err(err) => eprintln!("{err}"),
                }
            }
            "find_member" => {
                let name = rest.trim();
                match tree.find_member(name) {
                    Some(id) => println!("The ID of {name} is {id}."),
                    None => println!("No member of the name \"{name}\" was found."),
                }
            }
            "add_member" => {
                let (gender_tok, rest) = next_token(rest);
                let gender = match gender_tok {
                    Some("M") | Some("m") => Gender::Male,
                    Some("F") | Some("f") => Gender::Female,
                    _ => {
                        eprintln!("Invalid gender: must be 'M' or 'F'.");
                        continue;
                    }
                };
                let (father_tok, rest) = next_token(rest);
                let (mother_tok, rest) = next_token(rest);
                let parents = father_tok
                    .zip(mother_tok)
                    .and_then(|(f, m)| Some((f.parse::<u32>().ok()?, m.parse::<u32>().ok()?)));
                let Some((father, mother)) = parents else {
                    eprintln!("Invalid ID for parents.");
                    continue;
                };
                let name = rest.trim().to_string();
                match tree.add_member(
                    name.clone(),
                    gender,
                    MemberId::from_raw(father),
                    MemberId::from_raw(mother),
                ) {
                    Ok(id) => {
                        dirty = true;
                        eprintln!("\"{name}\" added, with ID {id}.");
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            "set_name" => {
                let (id_tok, rest) = next_token(rest);
                let Some(id) = id_tok.and_then(parse_id) else {
                    eprintln!("Invalid ID.");
                    continue;
                };
                let name = rest.trim().to_string();
                match tree.set_name(id, name.clone()) {
                    Ok(()) => {
                        dirty = true;
                        eprintln!("The name of member {id} was changed to \"{name}\".");
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            "connect_parent" => {
                let Some((child, parent)) = parse_two_ids(rest) else {
                    continue;
                };
                match tree.connect_parent(child, parent) {
                    Ok(()) => {
                        dirty = true;
                        // Both lookups succeed after a successful connect.
                        if let (Ok(p), Ok(c)) = (tree.get_member(parent), tree.get_member(child)) {
                            let slot = match p.gender {
                                Gender::Male => "father",
                                Gender::Female => "mother",
                            };
                            eprintln!("The {slot} of {} is now {}.", c.name, p.name);
                        }
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            "disconnect_father" => {
                let Some(id) = parse_id_arg(rest) else {
                    continue;
                };
                match tree.disconnect_father(id) {
                    Ok(()) => {
                        dirty = true;
                        if let Ok(m) = tree.get_member(id) {
                            eprintln!("The father of {} is no longer listed.", m.name);
                        }
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            "disconnect_mother" => {
                let Some(id) = parse_id_arg(rest) else {
                    continue;
                };
                match tree.disconnect_mother(id) {
                    Ok(()) => {
                        dirty = true;
                        if let Ok(m) = tree.get_member(id) {
                            eprintln!("The mother of {} is no longer listed.", m.name);
                        }
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            "remove_member" => {
                let Some(id) = parse_id_arg(rest) else {
                    continue;
                };
                let name = match tree.get_member(id) {
                    Ok(m) => m.name.clone(),
                    Err(err) => {
                        eprintln!("{err}");
                        continue;
                    }
                };
                match tree.remove_member(id) {
                    Ok(()) => {
                        dirty = true;
                        eprintln!("{name} has been removed.");
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            "get_relationship" => {
                let Some((subject, object)) = parse_two_ids(rest) else {
                    continue;
                };
                match tree.get_relationship(subject, object) {
                    Ok(relationship) => {
                        if let (Ok(o), Ok(s)) = (tree.get_member(object), tree.get_member(subject))
                        {
                            println!("{} is the {relationship} of {}.", o.name, s.name);
                        }
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            "read_from_file" => {
                let filename = rest.trim().to_string();
                if dirty && !confirm_discard(&mut lines)? {
                    eprintln!("Cancelling...");
                    continue;
                }
                match tree.read_from_file(&filename) {
                    Ok(()) => {
                        dirty = false;
                        current_file = Some(PathBuf::from(filename));
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            "store_to_file" => {
                let filename = rest.trim().to_string();
                match tree.store_to_file(&filename) {
                    Ok(()) => {
                        dirty = false;
                        current_file = Some(PathBuf::from(filename));
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            "save" => {
                let Some(path) = current_file.clone() else {
                    eprintln!("No filename given. Cancelling...");
                    continue;
                };
                match tree.store_to_file(&path) {
                    Ok(()) => dirty = false,
                    Err(err) => eprintln!("{err}"),
                }
            }
            "exit" => {
                if dirty && !confirm_discard(&mut lines)? {
                    eprintln!("Cancelling...");
                    continue;
                }
                break;
            }
            _ => println!("This function is not supported."),
        }
    }
    Ok(())
}

/// Split off the next whitespace-delimited token.
fn next_token(input: &str) -> (Option<&str>, &str) {
    let input = input.trim_start();
    if input.is_empty() {
        return (None, "");
    }
    match input.find(char::is_whitespace) {
        Some(i) => (Some(&input[..i]), &input[i..]),
        None => (Some(input), ""),
    }
}

fn parse_id(token: &str) -> Option<MemberId> {
    token.parse::<u32>().ok().filter(|v| *v != 0).map(MemberId)
}

/// One ID argument; prints "Invalid ID." and yields None on bad input.
fn parse_id_arg(rest: &str) -> Option<MemberId> {
    let (tok, _) = next_token(rest);
    let id = tok.and_then(parse_id);
    if id.is_none() {
        eprintln!("Invalid ID.");
    }
    id
}

fn parse_two_ids(rest: &str) -> Option<(MemberId, MemberId)> {
    let (first, rest) = next_token(rest);
    let (second, _) = next_token(rest);
    let pair = first.and_then(parse_id).zip(second.and_then(parse_id));
    if pair.is_none() {
        eprintln!("Invalid ID.");
    }
    pair
}

fn confirm_discard(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<bool> {
    print!("You have made changes. Are you sure you want to discard them? (y/N) >> ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => {
            let line = line?;
            let answer = line.trim();
            Ok(answer.eq_ignore_ascii_case("y"))
        }
        None => Ok(false),
    }
}
