use pagesim::config::{ACCESSES_PER_PROCESS, NUM_FRAMES, NUM_PROCESSES, PAGES_PER_PROCESS};
use pagesim::errors::TranslationError;
use pagesim::memory::FramePool;
use pagesim::shared::logger::setup_logger;
use pagesim::sim::{translate, Process, ProcessId};

/// The virtual addresses each demo process tries to access, in order.
const DEMO_ACCESSES: [[usize; ACCESSES_PER_PROCESS]; NUM_PROCESSES] = [
    [0, 4096, 8192, 12288, 16384],
    [20480, 24576, 28672, 32768, 36864],
];

fn main() {
    setup_logger();

    let mut pool = FramePool::new(NUM_FRAMES);

    // One process runs its whole access list before the next one starts.
    for (index, accesses) in DEMO_ACCESSES.iter().enumerate() {
        let id = index as ProcessId + 1;
        let mut process = Process::new(id, PAGES_PER_PROCESS, accesses.to_vec());

        println!();
        println!("Address translation for process {id}:");
        run_accesses(&mut process, &mut pool);
    }
}

fn run_accesses(process: &mut Process, pool: &mut FramePool) {
    for i in 0..process.accesses().len() {
        let virtual_address = process.accesses()[i];
        println!(
            "process {} accessing virtual address {virtual_address}",
            process.id(),
        );

        match translate(process, pool, virtual_address) {
            Ok(translation) => {
                if translation.faulted {
                    println!(
                        "allocating virtual page {} of process {} to physical frame {}",
                        translation.page_number,
                        process.id(),
                        translation.frame,
                    );
                }
                println!("physical address: {}", translation.physical_address);
            }
            Err(TranslationError::NoFreeFrame) => {
                println!(
                    "page fault: no free frame, virtual address {virtual_address} cannot be mapped",
                );
            }
            Err(error) => {
                println!("virtual address {virtual_address} rejected: {error}");
            }
        }
    }
}
