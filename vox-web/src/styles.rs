pub const READ_BUTTON: &str = "bg-gray-800 text-white px-4 py-2 rounded hover:bg-gray-700 focus:outline-none";
pub const CREATE_BUTTON: &str = "bg-blue-500 text-white px-4 py-2 rounded hover:bg-blue-600 focus:outline-none focus:ring-2 focus:ring-blue-300";
pub const DELETE_BUTTON: &str = "bg-red-500 text-white px-2 py-1 rounded hover:bg-red-600 text-sm";
pub const SMALL_BUTTON: &str = "bg-gray-200 text-gray-800 px-2 py-1 rounded hover:bg-gray-300 text-sm";
